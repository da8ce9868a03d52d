//! Shared fixtures for integration tests.

use pv_sizer::site::{
    ApplianceCategory, ApplianceEntry, ChemistryPreference, EnergySource, HouseholdProfile,
    Region, RoofDirection, ShadingLevel, SystemType,
};

/// A plausible hybrid household in Mount Lebanon.
pub fn family_profile() -> HouseholdProfile {
    HouseholdProfile {
        region: Some(Region::MountLebanon),
        roof_area_m2: 80.0,
        roof_direction: RoofDirection::South,
        shading: ShadingLevel::Minimal,
        system_type: SystemType::Hybrid,
        battery_chemistry: ChemistryPreference::LeadAcid,
        backup_days: 2,
        energy_source: EnergySource::EdlAndGenerator,
    }
}

pub fn appliance(
    name: &str,
    category: ApplianceCategory,
    watts: f64,
    quantity: u32,
    hours: f64,
) -> ApplianceEntry {
    ApplianceEntry {
        name: name.to_string(),
        category,
        rated_watts: watts,
        custom_watts: None,
        quantity,
        hours_per_day: hours,
        critical: None,
    }
}

/// A realistic appliance inventory for the family profile.
pub fn family_appliances() -> Vec<ApplianceEntry> {
    use ApplianceCategory as Cat;
    vec![
        appliance("LED Bulbs", Cat::Lighting, 10.0, 10, 6.0),
        appliance("Refrigerator", Cat::Appliances, 150.0, 1, 24.0),
        appliance("Freezer", Cat::Appliances, 200.0, 1, 24.0),
        appliance("Split AC Unit", Cat::Cooling, 1500.0, 1, 8.0),
        appliance("Washing Machine", Cat::Appliances, 2000.0, 1, 1.0),
        appliance("LED TV", Cat::Entertainment, 100.0, 1, 6.0),
        appliance("Router/Modem", Cat::Electronics, 15.0, 1, 24.0),
    ]
}
