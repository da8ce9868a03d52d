//! Electricity tariffs by supply arrangement.

use serde::Serialize;

use crate::site::EnergySource;

/// Cost-per-kWh lookup by the household's current supply arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TariffTable {
    /// EDL grid rate (USD/kWh).
    pub edl_usd_per_kwh: f64,
    /// Weighted EDL + private generator rate (USD/kWh).
    pub mixed_usd_per_kwh: f64,
    /// Private generator subscription rate (USD/kWh).
    pub generator_usd_per_kwh: f64,
}

impl TariffTable {
    /// 2024 Lebanese rates: EDL 0.10, mixed 0.35, generator 0.45 USD/kWh.
    pub fn lebanon() -> Self {
        Self {
            edl_usd_per_kwh: 0.10,
            mixed_usd_per_kwh: 0.35,
            generator_usd_per_kwh: 0.45,
        }
    }

    /// Rate the household pays today for one kWh (USD).
    pub fn cost_per_kwh(&self, source: EnergySource) -> f64 {
        match source {
            EnergySource::EdlOnly => self.edl_usd_per_kwh,
            EnergySource::EdlAndGenerator => self.mixed_usd_per_kwh,
            EnergySource::GeneratorOnly => self.generator_usd_per_kwh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_by_source() {
        let t = TariffTable::lebanon();
        assert_eq!(t.cost_per_kwh(EnergySource::EdlOnly), 0.10);
        assert_eq!(t.cost_per_kwh(EnergySource::EdlAndGenerator), 0.35);
        assert_eq!(t.cost_per_kwh(EnergySource::GeneratorOnly), 0.45);
    }

    #[test]
    fn generator_power_costs_most() {
        let t = TariffTable::lebanon();
        assert!(t.generator_usd_per_kwh > t.mixed_usd_per_kwh);
        assert!(t.mixed_usd_per_kwh > t.edl_usd_per_kwh);
    }
}
