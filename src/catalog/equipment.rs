//! Market equipment database: panels, inverters, batteries, controllers.
//!
//! The shipped entries mirror the best-selling brands on the Lebanese market
//! with indicative USD pricing. Prices vary ±15–30% with supplier, quantity,
//! and exchange rate; the economics output carries the disclaimer.

use serde::Serialize;

/// Market availability, ordinal: `Poor < Fair < Good < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Availability {
    /// Human-readable availability grade.
    pub fn label(self) -> &'static str {
        match self {
            Availability::Poor => "Poor",
            Availability::Fair => "Fair",
            Availability::Good => "Good",
            Availability::Excellent => "Excellent",
        }
    }
}

/// One PV module model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panel {
    pub brand: &'static str,
    pub model: &'static str,
    /// Nameplate power at STC (W).
    pub wattage_w: f64,
    /// Module efficiency (%).
    pub efficiency_pct: f64,
    /// Module footprint (m²).
    pub area_m2: f64,
    /// Indicative unit price (USD).
    pub price_usd: f64,
    pub availability: Availability,
}

/// One inverter model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Inverter {
    pub brand: &'static str,
    pub model: &'static str,
    /// Continuous AC output (W).
    pub power_w: f64,
    /// Short-duration surge output (W).
    pub surge_power_w: f64,
    /// Conversion efficiency (%).
    pub efficiency_pct: f64,
    /// Indicative unit price (USD).
    pub price_usd: f64,
    pub availability: Availability,
}

/// Storage cell chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryChemistry {
    FloodedLeadAcid,
    TubularLeadAcid,
    AgmLeadAcid,
    OpzsLeadAcid,
    LithiumIronPhosphate,
}

impl BatteryChemistry {
    pub fn is_lithium(self) -> bool {
        matches!(self, BatteryChemistry::LithiumIronPhosphate)
    }

    pub fn is_lead_acid(self) -> bool {
        !self.is_lithium()
    }

    /// Usable fraction of rated capacity before recharge.
    pub fn depth_of_discharge(self) -> f64 {
        match self {
            BatteryChemistry::LithiumIronPhosphate => 0.95,
            BatteryChemistry::AgmLeadAcid => 0.60,
            BatteryChemistry::FloodedLeadAcid
            | BatteryChemistry::TubularLeadAcid
            | BatteryChemistry::OpzsLeadAcid => 0.50,
        }
    }

    /// Human-readable chemistry name.
    pub fn label(self) -> &'static str {
        match self {
            BatteryChemistry::FloodedLeadAcid => "Flooded Lead-Acid",
            BatteryChemistry::TubularLeadAcid => "Tubular Lead-Acid",
            BatteryChemistry::AgmLeadAcid => "AGM Lead-Acid",
            BatteryChemistry::OpzsLeadAcid => "OPzS Lead-Acid",
            BatteryChemistry::LithiumIronPhosphate => "Lithium Iron Phosphate",
        }
    }
}

/// One battery model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Battery {
    pub brand: &'static str,
    pub model: &'static str,
    /// Rated capacity (Ah).
    pub capacity_ah: f64,
    /// Nominal voltage (V).
    pub voltage_v: f64,
    pub chemistry: BatteryChemistry,
    /// Rated energy content for lithium packs (Wh); lead-acid entries derive
    /// energy from `capacity_ah * voltage_v`.
    pub rated_energy_wh: Option<f64>,
    /// Cycle life at the chemistry's depth of discharge.
    pub cycle_life: u32,
    /// Indicative unit price (USD).
    pub price_usd: f64,
    pub availability: Availability,
}

impl Battery {
    /// Nominal energy of one unit (Wh).
    pub fn energy_wh(&self) -> f64 {
        self.rated_energy_wh
            .unwrap_or(self.capacity_ah * self.voltage_v)
    }

    /// Usable energy of one unit at the chemistry's DoD (Wh).
    pub fn usable_energy_wh(&self) -> f64 {
        self.energy_wh() * self.chemistry.depth_of_discharge()
    }
}

/// One MPPT charge controller model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeController {
    pub brand: &'static str,
    pub model: &'static str,
    /// Rated charge current (A).
    pub current_a: f64,
    /// Maximum PV input at 48 V (W).
    pub max_pv_power_w: f64,
    /// Indicative unit price (USD).
    pub price_usd: f64,
    pub availability: Availability,
}

/// The full market database the selector draws from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentCatalog {
    pub panels: Vec<Panel>,
    pub inverters: Vec<Inverter>,
    pub batteries: Vec<Battery>,
    pub charge_controllers: Vec<ChargeController>,
}

impl EquipmentCatalog {
    /// The shipped Lebanese-market snapshot.
    pub fn lebanese_market() -> Self {
        Self {
            panels: vec![
                Panel {
                    brand: "LONGi Solar",
                    model: "Hi-MO 4m LR4-72HPH-450M",
                    wattage_w: 450.0,
                    efficiency_pct: 20.6,
                    area_m2: 2.17,
                    price_usd: 135.0,
                    availability: Availability::Excellent,
                },
                Panel {
                    brand: "JinkoSolar",
                    model: "Tiger Pro JKM440M-54HL4-V",
                    wattage_w: 440.0,
                    efficiency_pct: 20.78,
                    area_m2: 2.21,
                    price_usd: 130.0,
                    availability: Availability::Excellent,
                },
                Panel {
                    brand: "Canadian Solar",
                    model: "HiKu CS3W-400MS",
                    wattage_w: 400.0,
                    efficiency_pct: 20.3,
                    area_m2: 2.01,
                    price_usd: 115.0,
                    availability: Availability::Good,
                },
                Panel {
                    brand: "Trina Solar",
                    model: "Vertex S TSM-405DE09.08",
                    wattage_w: 405.0,
                    efficiency_pct: 20.8,
                    area_m2: 2.00,
                    price_usd: 125.0,
                    availability: Availability::Good,
                },
                Panel {
                    brand: "Risen Energy",
                    model: "RSM120-8-535M",
                    wattage_w: 535.0,
                    efficiency_pct: 20.7,
                    area_m2: 2.58,
                    price_usd: 155.0,
                    availability: Availability::Fair,
                },
            ],
            inverters: vec![
                Inverter {
                    brand: "MUST Solar",
                    model: "PV18-5048 VPK",
                    power_w: 5000.0,
                    surge_power_w: 15000.0,
                    efficiency_pct: 93.0,
                    price_usd: 580.0,
                    availability: Availability::Excellent,
                },
                Inverter {
                    brand: "Growatt",
                    model: "SPF 5000 ES",
                    power_w: 5000.0,
                    surge_power_w: 10000.0,
                    efficiency_pct: 93.0,
                    price_usd: 520.0,
                    availability: Availability::Excellent,
                },
                Inverter {
                    brand: "Victron Energy",
                    model: "MultiPlus-II 48/3000/35-32",
                    power_w: 3000.0,
                    surge_power_w: 6000.0,
                    efficiency_pct: 94.0,
                    price_usd: 750.0,
                    availability: Availability::Good,
                },
                Inverter {
                    brand: "Goodwe",
                    model: "GW5048D-ES",
                    power_w: 5000.0,
                    surge_power_w: 10000.0,
                    efficiency_pct: 97.6,
                    price_usd: 650.0,
                    availability: Availability::Good,
                },
                Inverter {
                    brand: "SMA",
                    model: "Sunny Island 4.4M",
                    power_w: 3300.0,
                    surge_power_w: 4600.0,
                    efficiency_pct: 96.0,
                    price_usd: 1200.0,
                    availability: Availability::Fair,
                },
            ],
            batteries: vec![
                Battery {
                    brand: "Eastman",
                    model: "Tubular Deep Cycle 200Ah",
                    capacity_ah: 200.0,
                    voltage_v: 12.0,
                    chemistry: BatteryChemistry::TubularLeadAcid,
                    rated_energy_wh: None,
                    cycle_life: 1200,
                    price_usd: 220.0,
                    availability: Availability::Excellent,
                },
                Battery {
                    brand: "Trojan",
                    model: "T-105 RE Deep Cycle",
                    capacity_ah: 225.0,
                    voltage_v: 6.0,
                    chemistry: BatteryChemistry::FloodedLeadAcid,
                    rated_energy_wh: None,
                    cycle_life: 1500,
                    price_usd: 165.0,
                    availability: Availability::Good,
                },
                Battery {
                    brand: "Fullriver",
                    model: "DC224-6A AGM",
                    capacity_ah: 224.0,
                    voltage_v: 6.0,
                    chemistry: BatteryChemistry::AgmLeadAcid,
                    rated_energy_wh: None,
                    cycle_life: 1000,
                    price_usd: 185.0,
                    availability: Availability::Good,
                },
                Battery {
                    brand: "Pylontech",
                    model: "US3000C LiFePO4",
                    capacity_ah: 74.0,
                    voltage_v: 48.0,
                    chemistry: BatteryChemistry::LithiumIronPhosphate,
                    rated_energy_wh: Some(3550.0),
                    cycle_life: 6000,
                    price_usd: 1050.0,
                    availability: Availability::Fair,
                },
                Battery {
                    brand: "BAE",
                    model: "PVS 2420 OPzS",
                    capacity_ah: 420.0,
                    voltage_v: 2.0,
                    chemistry: BatteryChemistry::OpzsLeadAcid,
                    rated_energy_wh: None,
                    cycle_life: 1800,
                    price_usd: 145.0,
                    availability: Availability::Fair,
                },
            ],
            charge_controllers: vec![
                ChargeController {
                    brand: "EPEVER",
                    model: "Tracer 6415AN",
                    current_a: 60.0,
                    max_pv_power_w: 3120.0,
                    price_usd: 145.0,
                    availability: Availability::Excellent,
                },
                ChargeController {
                    brand: "Victron Energy",
                    model: "SmartSolar MPPT 100/50",
                    current_a: 50.0,
                    max_pv_power_w: 2900.0,
                    price_usd: 185.0,
                    availability: Availability::Good,
                },
                ChargeController {
                    brand: "Morningstar",
                    model: "TriStar TS-MPPT-60",
                    current_a: 60.0,
                    max_pv_power_w: 3400.0,
                    price_usd: 220.0,
                    availability: Availability::Fair,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_ordering_is_ordinal() {
        assert!(Availability::Excellent > Availability::Good);
        assert!(Availability::Good > Availability::Fair);
        assert!(Availability::Fair > Availability::Poor);
    }

    #[test]
    fn lithium_pack_reports_rated_energy() {
        let catalog = EquipmentCatalog::lebanese_market();
        let lithium = catalog
            .batteries
            .iter()
            .find(|b| b.chemistry.is_lithium());
        assert_eq!(lithium.map(Battery::energy_wh), Some(3550.0));
        // 95% DoD
        let usable = lithium.map(Battery::usable_energy_wh).unwrap_or(0.0);
        assert!((usable - 3372.5).abs() < 1e-9);
    }

    #[test]
    fn lead_acid_energy_derives_from_plate_rating() {
        let b = Battery {
            brand: "Test",
            model: "T",
            capacity_ah: 200.0,
            voltage_v: 12.0,
            chemistry: BatteryChemistry::TubularLeadAcid,
            rated_energy_wh: None,
            cycle_life: 1000,
            price_usd: 100.0,
            availability: Availability::Good,
        };
        assert_eq!(b.energy_wh(), 2400.0);
        assert_eq!(b.usable_energy_wh(), 1200.0);
    }

    #[test]
    fn dod_by_chemistry() {
        assert_eq!(BatteryChemistry::AgmLeadAcid.depth_of_discharge(), 0.60);
        assert_eq!(BatteryChemistry::TubularLeadAcid.depth_of_discharge(), 0.50);
        assert_eq!(
            BatteryChemistry::LithiumIronPhosphate.depth_of_discharge(),
            0.95
        );
    }

    #[test]
    fn market_catalog_is_nonempty_per_component() {
        let catalog = EquipmentCatalog::lebanese_market();
        assert!(!catalog.panels.is_empty());
        assert!(!catalog.inverters.is_empty());
        assert!(!catalog.batteries.is_empty());
        assert!(!catalog.charge_controllers.is_empty());
    }
}
