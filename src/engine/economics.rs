//! Economic outlook: savings, payback, NPV, ROI, LCOE, and CO₂ avoided.

use crate::catalog::TariffTable;
use crate::engine::types::{CostBreakdown, Economics, LoadAnalysis, SystemSizing};
use crate::engine::{round1, round3};
use crate::site::EnergySource;

/// Discount rate reflecting Lebanese economic conditions.
pub const DISCOUNT_RATE: f64 = 0.08;
/// Annual panel output degradation.
pub const PANEL_DEGRADATION: f64 = 0.006;
/// Annual electricity tariff inflation.
pub const TARIFF_INFLATION: f64 = 0.05;
/// System lifetime the outlook is computed over (years).
pub const LIFESPAN_YEARS: u32 = 25;
/// Grid emission factor (kg CO₂ per kWh displaced).
const GRID_CO2_KG_PER_KWH: f64 = 0.8;

/// Static market-variance disclaimer attached to every outlook.
pub const MARKET_DISCLAIMER: &str = "Prices are estimates based on current Lebanese market \
     conditions and may vary ±15-30% depending on supplier, quantity, exchange rate \
     fluctuations, and market availability.";

/// Net present value of 25 years of savings against the system cost.
///
/// Savings are capped each year at the inflated value of the energy the
/// household actually consumes; production beyond consumption earns nothing.
pub fn net_present_value(
    total_cost_usd: f64,
    annual_production_kwh: f64,
    daily_consumption_kwh: f64,
    cost_per_kwh: f64,
) -> f64 {
    let consumption_value = daily_consumption_kwh * 365.0 * cost_per_kwh;
    let mut npv = -total_cost_usd;
    for year in 1..=LIFESPAN_YEARS {
        let age = (year - 1) as i32;
        let production = annual_production_kwh * (1.0 - PANEL_DEGRADATION).powi(age);
        let inflation = (1.0 + TARIFF_INFLATION).powi(age);
        let savings = (production * cost_per_kwh * inflation).min(consumption_value * inflation);
        npv += savings / (1.0 + DISCOUNT_RATE).powi(year as i32);
    }
    npv
}

/// Builds the full economic outlook from the sized system and its cost.
pub fn evaluate(
    sizing: &SystemSizing,
    load: &LoadAnalysis,
    costs: &CostBreakdown,
    source: EnergySource,
    tariffs: &TariffTable,
) -> Economics {
    let cost_per_kwh = tariffs.cost_per_kwh(source);
    let total_cost = costs.total_usd;
    let annual_production = sizing.annual_production_kwh;

    // Savings cannot exceed what the household would have spent on the
    // energy it consumes.
    let consumption_value = load.total_daily_kwh * 365.0 * cost_per_kwh;
    let annual_savings = (annual_production * cost_per_kwh).min(consumption_value);

    let payback = if annual_savings > 0.0 {
        round1(total_cost / annual_savings)
    } else {
        0.0
    };
    let npv = net_present_value(total_cost, annual_production, load.total_daily_kwh, cost_per_kwh);
    let roi = if total_cost > 0.0 {
        ((npv + total_cost) / total_cost * 100.0).round()
    } else {
        0.0
    };
    let lcoe = if annual_production > 0.0 {
        round3(total_cost / (annual_production * f64::from(LIFESPAN_YEARS)))
    } else {
        0.0
    };
    let annual_co2 = (annual_production * GRID_CO2_KG_PER_KWH).round();

    Economics {
        total_system_cost_usd: total_cost.round(),
        cost_per_kw_usd: if sizing.nominal_kw > 0.0 {
            (total_cost / sizing.nominal_kw).round()
        } else {
            0.0
        },
        electricity_cost_usd_per_kwh: cost_per_kwh,
        annual_savings_usd: annual_savings.round(),
        simple_payback_years: payback,
        npv_25yr_usd: npv.round(),
        roi_25yr_pct: roi,
        lcoe_usd_per_kwh: lcoe,
        annual_co2_avoided_kg: annual_co2,
        lifetime_co2_avoided_kg: annual_co2 * f64::from(LIFESPAN_YEARS),
        disclaimer: MARKET_DISCLAIMER,
    }
}
