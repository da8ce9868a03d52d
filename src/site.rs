//! Household site description: profile, appliance entries, and their enums.

use serde::{Deserialize, Serialize};

/// Lebanese governorate the household is located in.
///
/// Keys into the regional irradiance table; see
/// [`crate::catalog::regions::RegionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Beirut,
    MountLebanon,
    NorthLebanon,
    Akkar,
    Bekaa,
    BaalbekHermel,
    Nabatieh,
    SouthLebanon,
}

impl Region {
    /// All governorates, in catalog order.
    pub const ALL: [Region; 8] = [
        Region::Beirut,
        Region::MountLebanon,
        Region::NorthLebanon,
        Region::Akkar,
        Region::Bekaa,
        Region::BaalbekHermel,
        Region::Nabatieh,
        Region::SouthLebanon,
    ];

    /// Human-readable governorate name.
    pub fn label(self) -> &'static str {
        match self {
            Region::Beirut => "Beirut Governorate",
            Region::MountLebanon => "Mount Lebanon Governorate",
            Region::NorthLebanon => "North Lebanon Governorate",
            Region::Akkar => "Akkar Governorate",
            Region::Bekaa => "Bekaa Governorate",
            Region::BaalbekHermel => "Baalbek-Hermel Governorate",
            Region::Nabatieh => "Nabatieh Governorate",
            Region::SouthLebanon => "South Lebanon Governorate",
        }
    }
}

/// Predominant facing of the roof surface the array will occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofDirection {
    South,
    SouthEast,
    SouthWest,
    East,
    West,
    North,
    Flat,
}

/// Shading severity over the array area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingLevel {
    None,
    Minimal,
    Partial,
    Significant,
}

impl ShadingLevel {
    /// Derating factor applied to overall system efficiency.
    pub fn factor(self) -> f64 {
        match self {
            ShadingLevel::None => 1.0,
            ShadingLevel::Minimal => 0.95,
            ShadingLevel::Partial => 0.85,
            ShadingLevel::Significant => 0.70,
        }
    }
}

/// Electrical topology of the installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    GridTie,
    Hybrid,
    Offgrid,
}

/// Battery chemistry the household prefers for the storage bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChemistryPreference {
    LeadAcid,
    Lithium,
}

/// How the household currently buys electricity.
///
/// Maps to a cost-per-kWh in the tariff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    EdlOnly,
    EdlAndGenerator,
    GeneratorOnly,
}

impl EnergySource {
    /// Human-readable supply description.
    pub fn label(self) -> &'static str {
        match self {
            EnergySource::EdlOnly => "EDL grid only",
            EnergySource::EdlAndGenerator => "EDL grid + private generator",
            EnergySource::GeneratorOnly => "private generator only",
        }
    }
}

/// Load category of an appliance, driving its simultaneity factor and the
/// default critical-load classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceCategory {
    Lighting,
    Cooling,
    Heating,
    Appliances,
    Electronics,
    Entertainment,
    Pumping,
    Custom,
}

impl ApplianceCategory {
    /// All categories, in reporting order.
    pub const ALL: [ApplianceCategory; 8] = [
        ApplianceCategory::Lighting,
        ApplianceCategory::Cooling,
        ApplianceCategory::Heating,
        ApplianceCategory::Appliances,
        ApplianceCategory::Electronics,
        ApplianceCategory::Entertainment,
        ApplianceCategory::Pumping,
        ApplianceCategory::Custom,
    ];

    /// Empirical fraction of this category's connected load assumed to draw
    /// at the same instant when estimating peak demand.
    pub fn simultaneity_factor(self) -> f64 {
        match self {
            ApplianceCategory::Lighting => 0.60,
            ApplianceCategory::Cooling => 0.85,
            ApplianceCategory::Heating => 0.75,
            ApplianceCategory::Appliances => 0.70,
            ApplianceCategory::Electronics => 0.90,
            ApplianceCategory::Entertainment => 0.50,
            ApplianceCategory::Pumping => 1.00,
            ApplianceCategory::Custom => 0.80,
        }
    }

    /// Whether appliances of this category count as critical (backup-worthy)
    /// load unless tagged otherwise on the entry itself.
    pub fn critical_by_default(self) -> bool {
        matches!(
            self,
            ApplianceCategory::Lighting | ApplianceCategory::Electronics
        )
    }

    /// Human-readable category name.
    pub fn label(self) -> &'static str {
        match self {
            ApplianceCategory::Lighting => "lighting",
            ApplianceCategory::Cooling => "cooling",
            ApplianceCategory::Heating => "heating",
            ApplianceCategory::Appliances => "appliances",
            ApplianceCategory::Electronics => "electronics",
            ApplianceCategory::Entertainment => "entertainment",
            ApplianceCategory::Pumping => "pumping",
            ApplianceCategory::Custom => "custom",
        }
    }
}

/// One appliance line in the household's load inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceEntry {
    /// Display name, e.g. `"Refrigerator"`.
    pub name: String,
    /// Load category.
    pub category: ApplianceCategory,
    /// Nameplate rating of one unit (W).
    pub rated_watts: f64,
    /// User-measured override of the nameplate rating (W).
    #[serde(default)]
    pub custom_watts: Option<f64>,
    /// Number of identical units (>= 1).
    pub quantity: u32,
    /// Average runtime per day (0–24 h).
    pub hours_per_day: f64,
    /// Explicit critical-load tag; when absent the category default applies.
    #[serde(default)]
    pub critical: Option<bool>,
}

impl ApplianceEntry {
    /// Wattage of one unit: the user override when present, else the rating.
    pub fn effective_watts(&self) -> f64 {
        self.custom_watts.unwrap_or(self.rated_watts)
    }

    /// Connected load across all units (W).
    pub fn total_watts(&self) -> f64 {
        self.effective_watts() * f64::from(self.quantity)
    }

    /// Energy consumed per day across all units (kWh).
    pub fn daily_kwh(&self) -> f64 {
        self.total_watts() * self.hours_per_day / 1000.0
    }

    /// Whether this entry must stay powered during outages.
    pub fn is_critical(&self) -> bool {
        self.critical
            .unwrap_or_else(|| self.category.critical_by_default())
    }
}

/// Site-level inputs describing the household and the desired system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    /// Governorate; optional so validation can report it missing rather than
    /// silently defaulting a location.
    pub region: Option<Region>,
    /// Usable roof area for the array (m²).
    pub roof_area_m2: f64,
    /// Roof facing.
    pub roof_direction: RoofDirection,
    /// Shading severity.
    pub shading: ShadingLevel,
    /// Electrical topology.
    pub system_type: SystemType,
    /// Preferred storage chemistry.
    pub battery_chemistry: ChemistryPreference,
    /// Days of autonomy the battery bank must cover (1–3).
    pub backup_days: u32,
    /// Current electricity supply arrangement.
    pub energy_source: EnergySource,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(watts: f64, custom: Option<f64>, qty: u32, hours: f64) -> ApplianceEntry {
        ApplianceEntry {
            name: "Test".to_string(),
            category: ApplianceCategory::Appliances,
            rated_watts: watts,
            custom_watts: custom,
            quantity: qty,
            hours_per_day: hours,
            critical: None,
        }
    }

    #[test]
    fn effective_watts_prefers_override() {
        let e = entry(150.0, Some(120.0), 1, 24.0);
        assert_eq!(e.effective_watts(), 120.0);
        let e = entry(150.0, None, 1, 24.0);
        assert_eq!(e.effective_watts(), 150.0);
    }

    #[test]
    fn daily_kwh_scales_with_quantity_and_hours() {
        let e = entry(100.0, None, 3, 5.0);
        assert_eq!(e.total_watts(), 300.0);
        assert_eq!(e.daily_kwh(), 1.5);
    }

    #[test]
    fn critical_defaults_from_category() {
        let mut e = entry(50.0, None, 1, 6.0);
        e.category = ApplianceCategory::Lighting;
        assert!(e.is_critical());
        e.category = ApplianceCategory::Cooling;
        assert!(!e.is_critical());
        // explicit tag wins over the category default
        e.critical = Some(true);
        assert!(e.is_critical());
    }

    #[test]
    fn shading_factors_strictly_decrease_with_severity() {
        let levels = [
            ShadingLevel::None,
            ShadingLevel::Minimal,
            ShadingLevel::Partial,
            ShadingLevel::Significant,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].factor() > pair[1].factor());
        }
    }

    #[test]
    fn region_serde_uses_snake_case_keys() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            region: Region,
        }
        let w: Result<Wrap, _> = toml::from_str("region = \"baalbek_hermel\"");
        assert_eq!(w.ok().map(|w| w.region), Some(Region::BaalbekHermel));
    }
}
