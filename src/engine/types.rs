//! Result types threaded between the pipeline stages and returned to callers.

use serde::Serialize;

use crate::catalog::{Battery, ChargeController, Inverter, Panel};
use crate::site::{ApplianceCategory, Region};

/// Connected load and energy subtotal for one appliance category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLoad {
    pub category: ApplianceCategory,
    /// Connected load across the category (W).
    pub watts: f64,
    /// Daily energy across the category (kWh).
    pub daily_kwh: f64,
    /// Number of units across the category.
    pub count: u32,
}

/// Aggregated demand figures produced by the load analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadAnalysis {
    /// Total energy consumed per day (kWh).
    pub total_daily_kwh: f64,
    /// Diversity-adjusted peak simultaneous demand (W).
    pub peak_simultaneous_w: f64,
    /// Connected load running 20+ hours a day (W).
    pub continuous_w: f64,
    /// Connected load running intermittently (W).
    pub intermittent_w: f64,
    /// Connected load that must survive outages (W).
    pub critical_w: f64,
    /// Backup capacity the battery bank must carry (W).
    pub backup_capacity_w: f64,
    /// Hours of autonomy requested (backup days × 24).
    pub autonomy_hours: f64,
    /// Energy the bank must store to cover the autonomy window (kWh).
    pub autonomy_energy_kwh: f64,
    /// Mean hourly draw (W).
    pub average_hourly_w: f64,
    /// Ratio of average to peak demand.
    pub load_factor: f64,
    /// Per-category subtotals, in category order; empty categories omitted.
    pub by_category: Vec<CategoryLoad>,
}

/// Array sizing and yield figures produced by the system sizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSizing {
    /// Published array size, rounded up to the nearest 0.5 kW.
    pub nominal_kw: f64,
    /// Engineering array size before publication rounding (kW).
    pub actual_kw: f64,
    /// Daily generation required to cover consumption after losses (kWh).
    pub required_daily_generation_kwh: f64,
    /// Expected first-year yield (kWh).
    pub annual_production_kwh: f64,
    /// Expected mean daily yield (kWh).
    pub average_daily_production_kwh: f64,
    /// Combined loss-chain efficiency (fraction, unrounded).
    pub system_efficiency: f64,
    /// Performance ratio for display (%).
    pub performance_ratio_pct: f64,
    /// Temperature derating divisor (unrounded).
    pub temperature_derating: f64,
}

/// Chosen panel model with derived quantity and cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSelection {
    pub panel: Panel,
    pub quantity: u32,
    /// Array nameplate total (W).
    pub total_wattage_w: f64,
    pub total_cost_usd: f64,
    /// Availability note for the end user.
    pub market_note: String,
}

/// Chosen inverter model, possibly as a multi-unit bank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InverterSelection {
    pub inverter: Inverter,
    pub quantity: u32,
    /// Continuous output across the bank (W).
    pub total_power_w: f64,
    /// Headroom over peak demand (%).
    pub adequacy_margin_pct: f64,
    pub total_cost_usd: f64,
    pub market_note: String,
}

/// Chosen battery model with bank configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatterySelection {
    pub battery: Battery,
    pub quantity: u32,
    /// Plate capacity across the bank (Ah).
    pub total_capacity_ah: f64,
    /// Nominal energy across the bank (kWh).
    pub total_energy_kwh: f64,
    /// Hours the bank sustains the backup load (h).
    pub autonomy_provided_h: f64,
    pub total_cost_usd: f64,
    pub market_note: String,
}

/// Chosen charge controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerSelection {
    pub controller: ChargeController,
    /// Share of the controller's current rating the array uses (%).
    pub utilization_pct: f64,
    pub total_cost_usd: f64,
    pub market_note: String,
}

/// Itemized system cost (USD).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub panels_usd: f64,
    pub inverter_usd: f64,
    pub batteries_usd: f64,
    pub charge_controller_usd: f64,
    pub installation_usd: f64,
    pub labor_usd: f64,
    pub permits_usd: f64,
    pub commissioning_usd: f64,
    pub mounting_usd: f64,
    pub wiring_usd: f64,
    pub protection_usd: f64,
    /// Grand total, rounded to whole dollars.
    pub total_usd: f64,
    /// Cost per installed watt of published capacity.
    pub per_watt_usd: f64,
}

/// Full output of the equipment selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentSelection {
    pub panels: PanelSelection,
    pub inverter: InverterSelection,
    pub batteries: BatterySelection,
    /// Absent when no catalog controller covers the array current and the
    /// inverter is assumed to integrate the MPPT stage.
    pub charge_controller: Option<ControllerSelection>,
    pub costs: CostBreakdown,
    /// Fallback substitutions and sizing remarks, in selection order.
    pub notes: Vec<String>,
}

/// One month of the production forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyProduction {
    pub month: &'static str,
    /// Forecast yield for the month (kWh).
    pub production_kwh: f64,
    /// Mean daily yield within the month (kWh).
    pub daily_average_kwh: f64,
    /// Plane-of-array irradiance for the month (kWh/m²).
    pub irradiance_kwh_m2: f64,
    /// Days in the month (fixed non-leap calendar).
    pub days: u32,
}

/// Financial outlook over the 25-year system life.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Economics {
    pub total_system_cost_usd: f64,
    pub cost_per_kw_usd: f64,
    /// Tariff the savings are valued at (USD/kWh).
    pub electricity_cost_usd_per_kwh: f64,
    /// First-year savings, capped at the value of consumed energy (USD).
    pub annual_savings_usd: f64,
    pub simple_payback_years: f64,
    pub npv_25yr_usd: f64,
    pub roi_25yr_pct: f64,
    /// Levelized cost of energy over 25 years (USD/kWh).
    pub lcoe_usd_per_kwh: f64,
    pub annual_co2_avoided_kg: f64,
    pub lifetime_co2_avoided_kg: f64,
    /// Static market-variance disclaimer.
    pub disclaimer: &'static str,
}

/// One phase of the installation plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallationPhase {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub tasks: Vec<String>,
    pub requirements: Vec<&'static str>,
    pub cost_usd: f64,
}

/// Phased project plan parameterized by the selected equipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallationPlan {
    pub total_duration: &'static str,
    pub phases: Vec<InstallationPhase>,
    /// Permits + installation + labor + commissioning across all phases.
    pub soft_costs_usd: f64,
    pub post_installation: Vec<&'static str>,
}

/// Advisory severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

/// One advisory note derived from the computed results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
}

/// Per-appliance consumption breakdown for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceBreakdown {
    pub name: String,
    pub category: ApplianceCategory,
    pub quantity: u32,
    pub unit_watts: f64,
    pub total_watts: f64,
    pub hours_per_day: f64,
    pub daily_kwh: f64,
    /// Current draw at 220 V across all units (A).
    pub amps_220v: f64,
    /// Running cost at the mixed tariff (USD/month).
    pub monthly_cost_usd: f64,
    pub annual_cost_usd: f64,
    pub simultaneity_factor: f64,
    /// Whether a user-measured wattage override was applied.
    pub custom_wattage: bool,
}

/// Site and resource summary echoed back with the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSummary {
    pub region: Region,
    pub region_label: &'static str,
    pub peak_sun_hours: f64,
    pub annual_irradiance_kwh_m2: f64,
    pub average_temp_c: f64,
    pub climate: &'static str,
}

/// Complete calculation result: one value per pipeline stage plus the
/// derived report sections. A pure function of the inputs and catalogs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultBundle {
    pub site: SiteSummary,
    pub load: LoadAnalysis,
    pub sizing: SystemSizing,
    pub equipment: EquipmentSelection,
    pub monthly_production: Vec<MonthlyProduction>,
    pub economics: Economics,
    pub installation: InstallationPlan,
    pub appliances: Vec<ApplianceBreakdown>,
    pub recommendations: Vec<Recommendation>,
}
