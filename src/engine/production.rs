//! Monthly production forecast over the regional irradiance profile.

use crate::catalog::RegionProfile;
use crate::engine::round2;
use crate::engine::types::{MonthlyProduction, SystemSizing};

/// Month labels, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Days per month in the fixed non-leap reference calendar.
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Projects the published array size across the 12-month irradiance series.
pub fn monthly_series(sizing: &SystemSizing, region: &RegionProfile) -> Vec<MonthlyProduction> {
    region
        .monthly_irradiance
        .iter()
        .enumerate()
        .map(|(idx, &irradiance)| {
            let production = (sizing.nominal_kw
                * irradiance
                * sizing.system_efficiency
                * sizing.temperature_derating)
                .round();
            let days = DAYS_IN_MONTH[idx];
            MonthlyProduction {
                month: MONTH_NAMES[idx],
                production_kwh: production,
                daily_average_kwh: round2(production / f64::from(days)),
                irradiance_kwh_m2: irradiance,
                days,
            }
        })
        .collect()
}
