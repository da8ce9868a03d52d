//! Load analysis: aggregates the appliance list into demand figures.

use crate::catalog::TariffTable;
use crate::engine::types::{ApplianceBreakdown, CategoryLoad, LoadAnalysis};
use crate::engine::{round1, round2};
use crate::site::{ApplianceCategory, ApplianceEntry, EnergySource};

/// Hours-per-day threshold above which a load counts as continuous.
const CONTINUOUS_HOURS: f64 = 20.0;
/// Share of intermittent load added to the critical load when sizing backup.
const INTERMITTENT_BACKUP_SHARE: f64 = 0.30;
/// Single-phase supply voltage used for current-draw reporting (V).
const SUPPLY_VOLTAGE_V: f64 = 220.0;

/// Diversity factor applied to the summed peak demand, by intermittent load.
///
/// Larger installations see less coincident demand.
pub(crate) fn diversity_factor(intermittent_w: f64) -> f64 {
    if intermittent_w < 3000.0 {
        0.90
    } else if intermittent_w < 8000.0 {
        0.85
    } else if intermittent_w < 15000.0 {
        0.80
    } else {
        0.75
    }
}

/// Aggregates the appliance list into consumption and peak-demand figures.
///
/// Zero appliances yield all-zero totals; rejecting an empty list is the
/// caller's concern via [`crate::engine::validate`].
pub fn analyze(appliances: &[ApplianceEntry], backup_days: u32) -> LoadAnalysis {
    let mut total_daily_kwh = 0.0;
    let mut continuous_w = 0.0;
    let mut intermittent_w = 0.0;
    let mut critical_w = 0.0;
    let mut peak_w = 0.0;
    let mut by_category: Vec<CategoryLoad> = Vec::new();

    for entry in appliances {
        let watts = entry.total_watts();
        let daily_kwh = entry.daily_kwh();
        total_daily_kwh += daily_kwh;

        let idx = match by_category
            .iter()
            .position(|c| c.category == entry.category)
        {
            Some(idx) => idx,
            None => {
                by_category.push(CategoryLoad {
                    category: entry.category,
                    watts: 0.0,
                    daily_kwh: 0.0,
                    count: 0,
                });
                by_category.len() - 1
            }
        };
        let slot = &mut by_category[idx];
        slot.watts += watts;
        slot.daily_kwh += daily_kwh;
        slot.count += entry.quantity;

        if entry.hours_per_day >= CONTINUOUS_HOURS {
            continuous_w += watts;
        } else {
            intermittent_w += watts;
        }

        if entry.is_critical() {
            critical_w += watts;
        }

        peak_w += watts * entry.category.simultaneity_factor();
    }

    peak_w *= diversity_factor(intermittent_w);

    let backup_capacity_w = critical_w + INTERMITTENT_BACKUP_SHARE * intermittent_w;
    let autonomy_hours = f64::from(backup_days) * 24.0;
    let autonomy_energy_kwh = backup_capacity_w / 1000.0 * autonomy_hours;

    let load_factor = if peak_w > 0.0 {
        total_daily_kwh * 1000.0 / (peak_w * 24.0)
    } else {
        0.0
    };

    // Keep reporting order stable regardless of input order.
    by_category.sort_by_key(|c| {
        ApplianceCategory::ALL
            .iter()
            .position(|cat| *cat == c.category)
    });
    for slot in &mut by_category {
        slot.watts = slot.watts.round();
        slot.daily_kwh = round2(slot.daily_kwh);
    }

    LoadAnalysis {
        total_daily_kwh: round2(total_daily_kwh),
        peak_simultaneous_w: peak_w.round(),
        continuous_w: continuous_w.round(),
        intermittent_w: intermittent_w.round(),
        critical_w: critical_w.round(),
        backup_capacity_w: backup_capacity_w.round(),
        autonomy_hours,
        autonomy_energy_kwh: round2(autonomy_energy_kwh),
        average_hourly_w: (total_daily_kwh / 24.0 * 1000.0).round(),
        load_factor: round2(load_factor),
        by_category,
    }
}

/// Per-appliance consumption rows for the report, valued at the mixed
/// grid+generator tariff the typical household pays today.
pub fn appliance_breakdown(
    appliances: &[ApplianceEntry],
    tariffs: &TariffTable,
) -> Vec<ApplianceBreakdown> {
    let rate = tariffs.cost_per_kwh(EnergySource::EdlAndGenerator);
    appliances
        .iter()
        .map(|entry| {
            let total_watts = entry.total_watts();
            let daily_kwh = entry.daily_kwh();
            let monthly_cost = daily_kwh * 30.0 * rate;
            ApplianceBreakdown {
                name: entry.name.clone(),
                category: entry.category,
                quantity: entry.quantity,
                unit_watts: entry.effective_watts(),
                total_watts,
                hours_per_day: entry.hours_per_day,
                daily_kwh: round2(daily_kwh),
                amps_220v: round1(total_watts / SUPPLY_VOLTAGE_V),
                monthly_cost_usd: round2(monthly_cost),
                annual_cost_usd: (monthly_cost * 12.0).round(),
                simultaneity_factor: entry.category.simultaneity_factor(),
                custom_wattage: entry.custom_watts.is_some(),
            }
        })
        .collect()
}
