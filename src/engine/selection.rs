//! Equipment selection: maps the sizing and load figures onto concrete
//! catalog items and rolls up system cost.
//!
//! Each component is chosen by an ordered chain of named rules tried in
//! sequence. Whenever a later rule supplies the result, the substitution is
//! recorded as a note on the selection output so nothing falls back
//! silently. Ties break toward the earlier catalog entry, keeping the
//! selection reproducible for identical inputs.

use crate::catalog::{Availability, Battery, EquipmentCatalog, Inverter, Panel};
use crate::engine::types::{
    BatterySelection, ControllerSelection, CostBreakdown, EquipmentSelection, InverterSelection,
    LoadAnalysis, PanelSelection, SystemSizing,
};
use crate::engine::{CalculationError, round1, round2};
use crate::site::{ChemistryPreference, HouseholdProfile};

/// DC bus voltage every string and controller is sized against (V).
pub(crate) const SYSTEM_VOLTAGE_V: f64 = 48.0;
/// Inverter continuous rating headroom over peak demand.
const INVERTER_HEADROOM: f64 = 1.25;
/// Controller current headroom over the array's nominal output.
const CONTROLLER_HEADROOM: f64 = 1.25;
/// Lithium banks only pay off above this autonomy requirement (kWh).
const LITHIUM_THRESHOLD_KWH: f64 = 20.0;

const INSTALLATION_USD_PER_W: f64 = 0.40;
const LABOR_USD_PER_W: f64 = 0.30;
const PERMITS_USD: f64 = 300.0;
const COMMISSIONING_USD: f64 = 200.0;
const MOUNTING_USD_PER_KW: f64 = 150.0;
const WIRING_USD_PER_KW: f64 = 100.0;
const PROTECTION_USD_PER_KW: f64 = 80.0;

/// Picks the highest-scoring item, preferring the earlier entry on ties.
fn best_by<'a, T, I, F>(iter: I, score: F) -> Option<&'a T>
where
    I: Iterator<Item = &'a T>,
    F: Fn(&T) -> f64,
{
    let mut best: Option<(&'a T, f64)> = None;
    for item in iter {
        let s = score(item);
        match best {
            None => best = Some((item, s)),
            Some((_, top)) if s > top => best = Some((item, s)),
            _ => {}
        }
    }
    best.map(|(item, _)| item)
}

fn market_note(availability: Availability) -> String {
    format!("{} availability in Lebanese market", availability.label())
}

// --- panels -----------------------------------------------------------

fn panel_best_value(catalog: &EquipmentCatalog) -> Option<&Panel> {
    best_by(
        catalog
            .panels
            .iter()
            .filter(|p| p.availability >= Availability::Good),
        |p| p.efficiency_pct / p.price_usd,
    )
}

fn panel_first_entry(catalog: &EquipmentCatalog) -> Option<&Panel> {
    catalog.panels.first()
}

const PANEL_RULES: &[(&str, fn(&EquipmentCatalog) -> Option<&Panel>)] = &[
    ("best value in available stock", panel_best_value),
    ("first catalog entry", panel_first_entry),
];

fn select_panels(
    catalog: &EquipmentCatalog,
    nominal_kw: f64,
    notes: &mut Vec<String>,
) -> Result<PanelSelection, CalculationError> {
    for (idx, (rule, pick)) in PANEL_RULES.iter().enumerate() {
        let Some(panel) = pick(catalog) else { continue };
        if idx > 0 {
            notes.push(format!(
                "no panel with good market availability; substituted {rule}: {} {}",
                panel.brand, panel.model
            ));
        }
        let quantity = (nominal_kw * 1000.0 / panel.wattage_w).ceil() as u32;
        return Ok(PanelSelection {
            panel: *panel,
            quantity,
            total_wattage_w: f64::from(quantity) * panel.wattage_w,
            total_cost_usd: f64::from(quantity) * panel.price_usd,
            market_note: market_note(panel.availability),
        });
    }
    Err(CalculationError::new(
        "equipment selection",
        "equipment catalog lists no panels",
    ))
}

// --- inverter ---------------------------------------------------------

fn inverter_cheapest_adequate(catalog: &EquipmentCatalog, required_w: f64) -> Option<&Inverter> {
    best_by(
        catalog
            .inverters
            .iter()
            .filter(|i| i.availability >= Availability::Good && i.power_w >= required_w),
        |i| -i.price_usd,
    )
}

fn inverter_largest_available(catalog: &EquipmentCatalog, _required_w: f64) -> Option<&Inverter> {
    best_by(
        catalog
            .inverters
            .iter()
            .filter(|i| i.availability >= Availability::Good),
        |i| i.power_w,
    )
}

fn inverter_largest_any(catalog: &EquipmentCatalog, _required_w: f64) -> Option<&Inverter> {
    best_by(catalog.inverters.iter(), |i| i.power_w)
}

const INVERTER_RULES: &[(&str, fn(&EquipmentCatalog, f64) -> Option<&Inverter>)] = &[
    ("cheapest adequate in available stock", inverter_cheapest_adequate),
    ("largest available unit, banked", inverter_largest_available),
    ("largest catalog unit, banked", inverter_largest_any),
];

fn select_inverter(
    catalog: &EquipmentCatalog,
    peak_demand_w: f64,
    notes: &mut Vec<String>,
) -> Result<InverterSelection, CalculationError> {
    let required_w = peak_demand_w * INVERTER_HEADROOM;
    for (idx, (rule, pick)) in INVERTER_RULES.iter().enumerate() {
        let Some(inverter) = pick(catalog, required_w) else {
            continue;
        };
        let quantity = if inverter.power_w >= required_w || inverter.power_w <= 0.0 {
            1
        } else {
            (required_w / inverter.power_w).ceil() as u32
        };
        if idx > 0 {
            notes.push(format!(
                "no single available inverter covers {required_w:.0} W; {rule}: {quantity} x {} {}",
                inverter.brand, inverter.model
            ));
        }
        let total_power_w = inverter.power_w * f64::from(quantity);
        let adequacy_margin_pct = if peak_demand_w > 0.0 {
            ((total_power_w - peak_demand_w) / peak_demand_w * 100.0).round()
        } else {
            0.0
        };
        return Ok(InverterSelection {
            inverter: *inverter,
            quantity,
            total_power_w,
            adequacy_margin_pct,
            total_cost_usd: inverter.price_usd * f64::from(quantity),
            market_note: market_note(inverter.availability),
        });
    }
    Err(CalculationError::new(
        "equipment selection",
        "equipment catalog lists no inverters",
    ))
}

// --- batteries --------------------------------------------------------

fn battery_available_lead_acid(catalog: &EquipmentCatalog) -> Option<&Battery> {
    catalog
        .batteries
        .iter()
        .find(|b| b.availability == Availability::Excellent && b.chemistry.is_lead_acid())
}

fn battery_any_lead_acid(catalog: &EquipmentCatalog) -> Option<&Battery> {
    catalog.batteries.iter().find(|b| b.chemistry.is_lead_acid())
}

fn battery_first_entry(catalog: &EquipmentCatalog) -> Option<&Battery> {
    catalog.batteries.first()
}

const LEAD_ACID_RULES: &[(&str, fn(&EquipmentCatalog) -> Option<&Battery>)] = &[
    ("readily available lead-acid", battery_available_lead_acid),
    ("any lead-acid entry", battery_any_lead_acid),
    ("first catalog entry", battery_first_entry),
];

fn select_batteries(
    catalog: &EquipmentCatalog,
    preference: ChemistryPreference,
    load: &LoadAnalysis,
    notes: &mut Vec<String>,
) -> Result<BatterySelection, CalculationError> {
    let autonomy_kwh = load.autonomy_energy_kwh;

    // Lithium pays for itself only on larger autonomy requirements.
    if preference == ChemistryPreference::Lithium && autonomy_kwh > LITHIUM_THRESHOLD_KWH {
        if let Some(battery) = catalog.batteries.iter().find(|b| b.chemistry.is_lithium()) {
            let usable_kwh = battery.usable_energy_wh() / 1000.0;
            let quantity = if usable_kwh > 0.0 {
                (autonomy_kwh / usable_kwh).ceil() as u32
            } else {
                0
            };
            return Ok(lithium_selection(battery, quantity, load));
        }
        notes.push(
            "no lithium battery in the catalog; sizing a lead-acid bank instead".to_string(),
        );
    }

    for (idx, (rule, pick)) in LEAD_ACID_RULES.iter().enumerate() {
        let Some(battery) = pick(catalog) else { continue };
        // The last-resort rule may hand back a non-lead-acid entry.
        if idx == LEAD_ACID_RULES.len() - 1 {
            notes.push(format!(
                "no lead-acid battery in the catalog; substituted {rule}: {} {}",
                battery.brand, battery.model
            ));
            if battery.chemistry.is_lithium() {
                let usable_kwh = battery.usable_energy_wh() / 1000.0;
                let quantity = if usable_kwh > 0.0 {
                    (autonomy_kwh / usable_kwh).ceil() as u32
                } else {
                    0
                };
                return Ok(lithium_selection(battery, quantity, load));
            }
        }
        return Ok(lead_acid_selection(battery, autonomy_kwh, load));
    }

    Err(CalculationError::new(
        "equipment selection",
        "equipment catalog lists no batteries",
    ))
}

fn lithium_selection(battery: &Battery, quantity: u32, load: &LoadAnalysis) -> BatterySelection {
    BatterySelection {
        battery: *battery,
        quantity,
        total_capacity_ah: f64::from(quantity) * battery.capacity_ah,
        total_energy_kwh: round2(f64::from(quantity) * battery.energy_wh() / 1000.0),
        autonomy_provided_h: autonomy_hours(battery, quantity, load.backup_capacity_w),
        total_cost_usd: f64::from(quantity) * battery.price_usd,
        market_note: market_note(battery.availability),
    }
}

fn lead_acid_selection(
    battery: &Battery,
    autonomy_kwh: f64,
    load: &LoadAnalysis,
) -> BatterySelection {
    let dod = battery.chemistry.depth_of_discharge();
    let total_ah_needed = autonomy_kwh * 1000.0 / (SYSTEM_VOLTAGE_V * dod);
    let series = (SYSTEM_VOLTAGE_V / battery.voltage_v).round() as u32;
    let parallel = (total_ah_needed / battery.capacity_ah).ceil() as u32;
    let quantity = series * parallel;
    BatterySelection {
        battery: *battery,
        quantity,
        total_capacity_ah: f64::from(quantity) * battery.capacity_ah,
        total_energy_kwh: round2(
            f64::from(quantity) * battery.capacity_ah * battery.voltage_v / 1000.0,
        ),
        autonomy_provided_h: autonomy_hours(battery, quantity, load.backup_capacity_w),
        total_cost_usd: f64::from(quantity) * battery.price_usd,
        market_note: market_note(battery.availability),
    }
}

/// Hours the configured bank sustains the backup load.
fn autonomy_hours(battery: &Battery, quantity: u32, backup_capacity_w: f64) -> f64 {
    if backup_capacity_w <= 0.0 {
        return 0.0;
    }
    let usable_wh = f64::from(quantity) * battery.usable_energy_wh();
    round1(usable_wh / backup_capacity_w)
}

// --- charge controller ------------------------------------------------

fn select_controller(
    catalog: &EquipmentCatalog,
    total_pv_w: f64,
    notes: &mut Vec<String>,
) -> Option<ControllerSelection> {
    let required_a = total_pv_w / SYSTEM_VOLTAGE_V * CONTROLLER_HEADROOM;
    let pick = best_by(
        catalog
            .charge_controllers
            .iter()
            .filter(|c| c.availability > Availability::Poor && c.current_a >= required_a),
        |c| -c.price_usd,
    );
    match pick {
        Some(controller) => Some(ControllerSelection {
            controller: *controller,
            utilization_pct: (total_pv_w / SYSTEM_VOLTAGE_V / controller.current_a * 100.0)
                .round(),
            total_cost_usd: controller.price_usd,
            market_note: "Separate charge controller (if not integrated in inverter)".to_string(),
        }),
        None => {
            notes.push(format!(
                "no charge controller rated for {required_a:.0} A; assuming an MPPT stage integrated in the inverter"
            ));
            None
        }
    }
}

// --- cost rollup ------------------------------------------------------

fn cost_breakdown(
    panels: &PanelSelection,
    inverter: &InverterSelection,
    batteries: &BatterySelection,
    controller: Option<&ControllerSelection>,
    nominal_kw: f64,
) -> CostBreakdown {
    let total_pv_w = panels.total_wattage_w;
    let per_kw_blocks = (total_pv_w / 1000.0).ceil();
    let panels_usd = panels.total_cost_usd;
    let inverter_usd = inverter.total_cost_usd;
    let batteries_usd = batteries.total_cost_usd;
    let charge_controller_usd = controller.map_or(0.0, |c| c.total_cost_usd);
    let installation_usd = total_pv_w * INSTALLATION_USD_PER_W;
    let labor_usd = total_pv_w * LABOR_USD_PER_W;
    let mounting_usd = per_kw_blocks * MOUNTING_USD_PER_KW;
    let wiring_usd = per_kw_blocks * WIRING_USD_PER_KW;
    let protection_usd = per_kw_blocks * PROTECTION_USD_PER_KW;

    let total = panels_usd
        + inverter_usd
        + batteries_usd
        + charge_controller_usd
        + installation_usd
        + labor_usd
        + PERMITS_USD
        + COMMISSIONING_USD
        + mounting_usd
        + wiring_usd
        + protection_usd;

    CostBreakdown {
        panels_usd,
        inverter_usd,
        batteries_usd,
        charge_controller_usd,
        installation_usd,
        labor_usd,
        permits_usd: PERMITS_USD,
        commissioning_usd: COMMISSIONING_USD,
        mounting_usd,
        wiring_usd,
        protection_usd,
        total_usd: total.round(),
        per_watt_usd: if nominal_kw > 0.0 {
            round2(total / (nominal_kw * 1000.0))
        } else {
            0.0
        },
    }
}

/// Runs every component's rule chain and assembles the selection output.
pub fn select_equipment(
    sizing: &SystemSizing,
    load: &LoadAnalysis,
    profile: &HouseholdProfile,
    catalog: &EquipmentCatalog,
) -> Result<EquipmentSelection, CalculationError> {
    let mut notes = Vec::new();
    let panels = select_panels(catalog, sizing.nominal_kw, &mut notes)?;
    let inverter = select_inverter(catalog, load.peak_simultaneous_w, &mut notes)?;
    let batteries = select_batteries(catalog, profile.battery_chemistry, load, &mut notes)?;
    let charge_controller = select_controller(catalog, panels.total_wattage_w, &mut notes);
    let costs = cost_breakdown(
        &panels,
        &inverter,
        &batteries,
        charge_controller.as_ref(),
        sizing.nominal_kw,
    );
    Ok(EquipmentSelection {
        panels,
        inverter,
        batteries,
        charge_controller,
        costs,
        notes,
    })
}
