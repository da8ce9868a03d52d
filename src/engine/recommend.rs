//! Advisory notes derived from the computed results.

use crate::engine::types::{
    Economics, EquipmentSelection, Recommendation, Severity, SystemSizing,
};
use crate::site::{HouseholdProfile, Region, RoofDirection};

/// Published sizes above this invite efficiency work first (kW).
const LARGE_SYSTEM_KW: f64 = 15.0;
/// Banks below this backup window warrant a capacity note (h).
const SHORT_AUTONOMY_H: f64 = 12.0;
/// Paybacks beyond this are flagged (years).
const LONG_PAYBACK_YEARS: f64 = 8.0;
/// Performance ratios below this suggest a siting problem (%).
const LOW_PERFORMANCE_PCT: f64 = 75.0;

fn note(severity: Severity, message: impl Into<String>) -> Recommendation {
    Recommendation {
        severity,
        message: message.into(),
    }
}

/// Derives advisory notes in a fixed order.
pub fn advise(
    profile: &HouseholdProfile,
    region: Region,
    sizing: &SystemSizing,
    equipment: &EquipmentSelection,
    economics: &Economics,
) -> Vec<Recommendation> {
    let mut notes = Vec::new();

    if sizing.nominal_kw > LARGE_SYSTEM_KW {
        notes.push(note(
            Severity::Warning,
            "Large system detected. Consider energy efficiency measures first to reduce the \
             initial investment.",
        ));
    }

    if equipment.batteries.autonomy_provided_h < SHORT_AUTONOMY_H {
        notes.push(note(
            Severity::Info,
            "Consider increasing battery capacity for longer backup during extended EDL \
             outages.",
        ));
    }

    if economics.simple_payback_years > LONG_PAYBACK_YEARS {
        notes.push(note(
            Severity::Warning,
            "Payback period exceeds 8 years. Consider reducing system size or improving \
             energy efficiency first.",
        ));
    }

    if sizing.performance_ratio_pct < LOW_PERFORMANCE_PCT {
        notes.push(note(
            Severity::Warning,
            "Low performance ratio. Check for shading issues or consider a different panel \
             orientation.",
        ));
    }

    if matches!(region, Region::Bekaa | Region::BaalbekHermel) {
        notes.push(note(
            Severity::Info,
            format!(
                "{} has excellent solar resources. The system will perform above the \
                 national average.",
                region.label()
            ),
        ));
    }

    if equipment.batteries.battery.chemistry.is_lead_acid() {
        notes.push(note(
            Severity::Info,
            "Lead-acid batteries require regular maintenance but are cost-effective for \
             local conditions.",
        ));
    }

    let array_area_m2 = f64::from(equipment.panels.quantity) * equipment.panels.panel.area_m2;
    if profile.roof_area_m2 > 0.0 && array_area_m2 > profile.roof_area_m2 {
        notes.push(note(
            Severity::Warning,
            format!(
                "The array needs about {array_area_m2:.0} m² but only {:.0} m² of roof is \
                 available. Consider higher-wattage panels or a smaller system.",
                profile.roof_area_m2
            ),
        ));
    }

    if !matches!(
        profile.roof_direction,
        RoofDirection::South | RoofDirection::Flat
    ) {
        notes.push(note(
            Severity::Info,
            "A southern or flat exposure maximizes yield; other orientations lose a few \
             percent of annual production.",
        ));
    }

    notes
}
