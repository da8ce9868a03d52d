//! The calculation engine: six pure stages behind one entry function.
//!
//! `calculate` threads each stage's output into the next and assembles the
//! final [`ResultBundle`]; `validate` screens inputs without ever failing.
//! Both are pure functions of their arguments — rerunning with identical
//! inputs and catalogs produces an identical bundle.

pub mod economics;
pub mod installation;
pub mod load;
pub mod production;
pub mod recommend;
pub mod selection;
pub mod sizing;
pub mod types;

use std::error::Error;
use std::fmt;

use crate::catalog::Catalogs;
use crate::site::{ApplianceEntry, HouseholdProfile};
use types::{ResultBundle, SiteSummary};

/// Wattage ceiling for a single appliance (W).
pub const MAX_APPLIANCE_WATTS: f64 = 10_000.0;
/// Residential connected-load ceiling (W).
pub const MAX_TOTAL_LOAD_W: f64 = 30_000.0;
/// Connected loads below this are implausible for a household (W).
pub const MIN_TOTAL_LOAD_W: f64 = 500.0;

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// A stage failure that aborts the whole calculation.
///
/// Carries the failing stage and a human-readable cause; recoverable
/// selection gaps never surface here — they are resolved by fallback rules
/// and recorded as notes on the output instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationError {
    /// Pipeline stage that failed.
    pub stage: &'static str,
    /// Human-readable cause.
    pub message: String,
}

impl CalculationError {
    pub fn new(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calculation failed in {}: {}; please verify your inputs and try again",
            self.stage, self.message
        )
    }
}

impl Error for CalculationError {}

/// One caller-correctable input problem found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted field path (e.g., `"appliances[2].watts"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {} — {}", self.field, self.message)
    }
}

/// Screens the inputs and returns every problem found; an empty list means
/// the inputs are acceptable for [`calculate`]. Never fails.
pub fn validate(
    profile: &HouseholdProfile,
    appliances: &[ApplianceEntry],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut push = |field: &str, message: &str| {
        issues.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    };

    if profile.region.is_none() {
        push("household.region", "a location/region must be specified");
    }
    if !(1..=3).contains(&profile.backup_days) {
        push("household.backup_days", "must be between 1 and 3 days");
    }

    if appliances.is_empty() {
        push("appliances", "at least one appliance must be selected");
        return issues;
    }

    for (idx, entry) in appliances.iter().enumerate() {
        let watts = entry.effective_watts();
        if !(watts > 0.0) || watts > MAX_APPLIANCE_WATTS {
            issues.push(ValidationIssue {
                field: format!("appliances[{idx}].watts"),
                message: "wattage must be between 1 and 10,000 W".to_string(),
            });
        }
        if entry.quantity == 0 {
            issues.push(ValidationIssue {
                field: format!("appliances[{idx}].quantity"),
                message: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=24.0).contains(&entry.hours_per_day) {
            issues.push(ValidationIssue {
                field: format!("appliances[{idx}].hours_per_day"),
                message: "must be between 0 and 24 hours".to_string(),
            });
        }
    }

    let total_w: f64 = appliances.iter().map(ApplianceEntry::total_watts).sum();
    if total_w > MAX_TOTAL_LOAD_W {
        issues.push(ValidationIssue {
            field: "appliances".to_string(),
            message: "total connected load exceeds the 30 kW residential ceiling".to_string(),
        });
    } else if total_w < MIN_TOTAL_LOAD_W {
        issues.push(ValidationIssue {
            field: "appliances".to_string(),
            message: "total connected load is implausibly low for a household".to_string(),
        });
    }

    issues
}

/// Rejects NaN/infinite intermediates before they poison later stages.
fn ensure_finite(stage: &'static str, name: &str, value: f64) -> Result<(), CalculationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalculationError::new(
            stage,
            format!("{name} is not a finite number"),
        ))
    }
}

/// Runs the full pipeline and assembles the result bundle.
///
/// # Errors
///
/// Fails with a [`CalculationError`] naming the stage when the region is
/// missing from the profile or the region table, when a catalog section is
/// empty with no fallback, or when an intermediate value turns non-finite.
pub fn calculate(
    profile: &HouseholdProfile,
    appliances: &[ApplianceEntry],
    catalogs: &Catalogs,
) -> Result<ResultBundle, CalculationError> {
    let region = profile.region.ok_or_else(|| {
        CalculationError::new("sizing", "no region specified; validate inputs first")
    })?;
    let region_profile = catalogs.regions.get(region).ok_or_else(|| {
        CalculationError::new(
            "sizing",
            format!("region table has no entry for {}", region.label()),
        )
    })?;

    let load = load::analyze(appliances, profile.backup_days);
    ensure_finite("load analysis", "total daily consumption", load.total_daily_kwh)?;
    ensure_finite("load analysis", "peak simultaneous load", load.peak_simultaneous_w)?;

    let sizing = sizing::size_system(&load, profile, region_profile);
    ensure_finite("sizing", "array size", sizing.actual_kw)?;

    let equipment = selection::select_equipment(&sizing, &load, profile, &catalogs.equipment)?;
    ensure_finite("equipment selection", "total system cost", equipment.costs.total_usd)?;

    let monthly_production = production::monthly_series(&sizing, region_profile);
    let economics = economics::evaluate(
        &sizing,
        &load,
        &equipment.costs,
        profile.energy_source,
        &catalogs.tariffs,
    );
    let installation = installation::plan(&equipment);
    let appliances_out = load::appliance_breakdown(appliances, &catalogs.tariffs);
    let recommendations = recommend::advise(profile, region, &sizing, &equipment, &economics);

    Ok(ResultBundle {
        site: SiteSummary {
            region,
            region_label: region.label(),
            peak_sun_hours: region_profile.peak_sun_hours,
            annual_irradiance_kwh_m2: region_profile.annual_irradiance_kwh_m2,
            average_temp_c: region_profile.average_temp_c,
            climate: region_profile.climate,
        },
        load,
        sizing,
        equipment,
        monthly_production,
        economics,
        installation,
        appliances: appliances_out,
        recommendations,
    })
}
