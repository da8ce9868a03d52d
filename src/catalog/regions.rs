//! Regional solar-resource profiles for the eight Lebanese governorates.
//!
//! Irradiance figures follow the Global Solar Atlas / NREL data the original
//! market survey was based on.

use serde::Serialize;

use crate::site::Region;

/// Solar resource and climate profile for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionProfile {
    /// Total annual irradiance on an optimally tilted plane (kWh/m²/yr).
    pub annual_irradiance_kwh_m2: f64,
    /// Average daily peak sun hours.
    pub peak_sun_hours: f64,
    /// Monthly irradiance series, January first (kWh/m²/month).
    pub monthly_irradiance: [f64; 12],
    /// Annual average ambient temperature (°C).
    pub average_temp_c: f64,
    /// Short climate description.
    pub climate: &'static str,
}

/// Lookup table from [`Region`] to its [`RegionProfile`].
#[derive(Debug, Clone, Serialize)]
pub struct RegionTable {
    entries: Vec<(Region, RegionProfile)>,
}

impl RegionTable {
    /// Builds a table from explicit entries.
    pub fn new(entries: Vec<(Region, RegionProfile)>) -> Self {
        Self { entries }
    }

    /// Profile for `region`, if the table carries it.
    pub fn get(&self, region: Region) -> Option<&RegionProfile> {
        self.entries.iter().find(|(r, _)| *r == region).map(|(_, p)| p)
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &(Region, RegionProfile)> {
        self.entries.iter()
    }

    /// The shipped Lebanese irradiance table.
    pub fn lebanon() -> Self {
        Self::new(vec![
            (
                Region::Beirut,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1680.0,
                    peak_sun_hours: 4.6,
                    monthly_irradiance: [
                        95.0, 110.0, 140.0, 165.0, 185.0, 195.0, 200.0, 190.0, 165.0, 135.0,
                        105.0, 85.0,
                    ],
                    average_temp_c: 20.5,
                    climate: "Mediterranean coastal",
                },
            ),
            (
                Region::MountLebanon,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1750.0,
                    peak_sun_hours: 4.8,
                    monthly_irradiance: [
                        100.0, 115.0, 150.0, 175.0, 195.0, 205.0, 210.0, 200.0, 175.0, 145.0,
                        110.0, 90.0,
                    ],
                    average_temp_c: 18.2,
                    climate: "Mountain Mediterranean",
                },
            ),
            (
                Region::NorthLebanon,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1650.0,
                    peak_sun_hours: 4.5,
                    monthly_irradiance: [
                        90.0, 105.0, 135.0, 160.0, 180.0, 190.0, 195.0, 185.0, 160.0, 130.0,
                        100.0, 80.0,
                    ],
                    average_temp_c: 19.8,
                    climate: "Coastal Mediterranean",
                },
            ),
            (
                Region::Akkar,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1680.0,
                    peak_sun_hours: 4.6,
                    monthly_irradiance: [
                        95.0, 110.0, 140.0, 165.0, 185.0, 195.0, 200.0, 190.0, 165.0, 135.0,
                        105.0, 85.0,
                    ],
                    average_temp_c: 18.9,
                    climate: "Mediterranean",
                },
            ),
            (
                Region::Bekaa,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1850.0,
                    peak_sun_hours: 5.1,
                    monthly_irradiance: [
                        110.0, 125.0, 160.0, 185.0, 210.0, 220.0, 225.0, 215.0, 185.0, 155.0,
                        120.0, 100.0,
                    ],
                    average_temp_c: 17.5,
                    climate: "Continental semi-arid",
                },
            ),
            (
                Region::BaalbekHermel,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1800.0,
                    peak_sun_hours: 4.9,
                    monthly_irradiance: [
                        105.0, 120.0, 155.0, 180.0, 205.0, 215.0, 220.0, 210.0, 180.0, 150.0,
                        115.0, 95.0,
                    ],
                    average_temp_c: 16.8,
                    climate: "Continental",
                },
            ),
            (
                Region::Nabatieh,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1730.0,
                    peak_sun_hours: 4.7,
                    monthly_irradiance: [
                        100.0, 115.0, 145.0, 170.0, 190.0, 200.0, 205.0, 195.0, 170.0, 140.0,
                        110.0, 95.0,
                    ],
                    average_temp_c: 20.2,
                    climate: "Mediterranean hill",
                },
            ),
            (
                Region::SouthLebanon,
                RegionProfile {
                    annual_irradiance_kwh_m2: 1720.0,
                    peak_sun_hours: 4.7,
                    monthly_irradiance: [
                        100.0, 115.0, 145.0, 170.0, 190.0, 200.0, 205.0, 195.0, 170.0, 140.0,
                        110.0, 95.0,
                    ],
                    average_temp_c: 21.0,
                    climate: "Mediterranean coastal",
                },
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lebanon_table_covers_every_region() {
        let table = RegionTable::lebanon();
        for region in Region::ALL {
            assert!(table.get(region).is_some(), "missing profile for {region:?}");
        }
    }

    #[test]
    fn monthly_series_sums_near_annual_total() {
        // The 12-month series should account for the annual irradiance figure.
        let table = RegionTable::lebanon();
        for (region, profile) in table.iter() {
            let sum: f64 = profile.monthly_irradiance.iter().sum();
            let rel = (sum - profile.annual_irradiance_kwh_m2).abs()
                / profile.annual_irradiance_kwh_m2;
            assert!(rel < 0.10, "{region:?}: monthly sum {sum} vs annual figure");
        }
    }

    #[test]
    fn peak_sun_hours_are_positive() {
        let table = RegionTable::lebanon();
        for (_, profile) in table.iter() {
            assert!(profile.peak_sun_hours > 0.0);
        }
    }

    #[test]
    fn bekaa_has_best_solar_resource() {
        let table = RegionTable::lebanon();
        let bekaa = table.get(Region::Bekaa).map(|p| p.annual_irradiance_kwh_m2);
        for (region, profile) in table.iter() {
            if *region != Region::Bekaa {
                assert!(Some(profile.annual_irradiance_kwh_m2) < bekaa);
            }
        }
    }
}
