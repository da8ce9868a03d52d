//! TOML-based site scenario configuration and preset definitions.
//!
//! A scenario holds the household table and an appliance array. Appliance
//! entries may be partial — name plus quantity — in which case the missing
//! fields are resolved from the shipped appliance catalog.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::ApplianceCatalog;
use crate::engine;
use crate::site::{
    ApplianceCategory, ApplianceEntry, ChemistryPreference, EnergySource, HouseholdProfile,
    Region, RoofDirection, ShadingLevel, SystemType,
};

/// Top-level scenario parsed from TOML.
///
/// Load from TOML with [`SiteScenario::from_toml_file`] or use a named
/// preset via [`SiteScenario::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteScenario {
    /// Household and system parameters.
    #[serde(default)]
    pub household: HouseholdConfig,
    /// Appliance inventory, possibly partial entries.
    #[serde(default, rename = "appliance")]
    pub appliances: Vec<ApplianceConfig>,
}

/// Household table of a scenario file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HouseholdConfig {
    /// Governorate; must be present for a calculation to run.
    pub region: Option<Region>,
    /// Usable roof area (m²).
    pub roof_area_m2: f64,
    /// Roof facing.
    pub roof_direction: RoofDirection,
    /// Shading severity.
    pub shading: ShadingLevel,
    /// Electrical topology.
    pub system_type: SystemType,
    /// Preferred storage chemistry.
    pub battery_chemistry: ChemistryPreference,
    /// Days of autonomy (1–3).
    pub backup_days: u32,
    /// Current supply arrangement.
    pub energy_source: EnergySource,
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        Self {
            region: None,
            roof_area_m2: 0.0,
            roof_direction: RoofDirection::South,
            shading: ShadingLevel::Minimal,
            system_type: SystemType::Hybrid,
            battery_chemistry: ChemistryPreference::LeadAcid,
            backup_days: 2,
            energy_source: EnergySource::EdlAndGenerator,
        }
    }
}

/// One appliance line of a scenario file; missing fields resolve from the
/// appliance catalog by name.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceConfig {
    pub name: String,
    #[serde(default)]
    pub category: Option<ApplianceCategory>,
    /// Nameplate rating of one unit (W).
    #[serde(default)]
    pub watts: Option<f64>,
    /// User-measured wattage override (W).
    #[serde(default)]
    pub custom_watts: Option<f64>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub hours_per_day: Option<f64>,
    #[serde(default)]
    pub critical: Option<bool>,
}

fn default_quantity() -> u32 {
    1
}

/// Scenario error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"appliance[3].watts"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scenario error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

fn preset_appliance(name: &str, quantity: u32) -> ApplianceConfig {
    ApplianceConfig {
        name: name.to_string(),
        category: None,
        watts: None,
        custom_watts: None,
        quantity,
        hours_per_day: None,
        critical: None,
    }
}

impl SiteScenario {
    /// Small Beirut apartment on mixed grid/generator supply.
    pub fn apartment() -> Self {
        Self {
            household: HouseholdConfig {
                region: Some(Region::Beirut),
                roof_area_m2: 25.0,
                roof_direction: RoofDirection::Flat,
                backup_days: 1,
                ..HouseholdConfig::default()
            },
            appliances: vec![
                preset_appliance("LED Bulbs", 6),
                preset_appliance("Refrigerator", 1),
                preset_appliance("LED TV", 1),
                preset_appliance("Router/Modem", 1),
                preset_appliance("Washing Machine", 1),
                preset_appliance("Ceiling Fan", 2),
            ],
        }
    }

    /// Mount Lebanon family house with a lithium bank preference.
    pub fn family_home() -> Self {
        Self {
            household: HouseholdConfig {
                region: Some(Region::MountLebanon),
                roof_area_m2: 80.0,
                battery_chemistry: ChemistryPreference::Lithium,
                ..HouseholdConfig::default()
            },
            appliances: vec![
                preset_appliance("LED Bulbs", 12),
                preset_appliance("Refrigerator", 1),
                preset_appliance("Freezer", 1),
                preset_appliance("Split AC Unit", 2),
                preset_appliance("Washing Machine", 1),
                preset_appliance("Microwave", 1),
                preset_appliance("LED TV", 2),
                preset_appliance("Router/Modem", 1),
                preset_appliance("Security System", 1),
                preset_appliance("Water Pump", 1),
            ],
        }
    }

    /// Off-grid Bekaa farmhouse on generator supply today.
    pub fn offgrid_farm() -> Self {
        let mut pump = preset_appliance("Water Pump", 1);
        // Larger borehole pump than the catalog default.
        pump.custom_watts = Some(1500.0);
        Self {
            household: HouseholdConfig {
                region: Some(Region::Bekaa),
                roof_area_m2: 120.0,
                shading: ShadingLevel::None,
                system_type: SystemType::Offgrid,
                battery_chemistry: ChemistryPreference::Lithium,
                backup_days: 3,
                energy_source: EnergySource::GeneratorOnly,
                ..HouseholdConfig::default()
            },
            appliances: vec![
                pump,
                preset_appliance("Refrigerator", 1),
                preset_appliance("Freezer", 1),
                preset_appliance("LED Bulbs", 10),
                preset_appliance("Router/Modem", 1),
                preset_appliance("LED TV", 1),
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["apartment", "family_home", "offgrid_farm"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "apartment" => Ok(Self::apartment()),
            "family_home" => Ok(Self::family_home()),
            "offgrid_farm" => Ok(Self::offgrid_farm()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Resolves partial appliance entries against the catalog and produces
    /// the engine's input types.
    ///
    /// Entries naming a catalog template inherit its category, wattage,
    /// runtime, and critical tag unless overridden; entries unknown to the
    /// catalog must spell out category, wattage, and runtime themselves.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for the first appliance that cannot be
    /// resolved.
    pub fn resolve(
        &self,
        defaults: &ApplianceCatalog,
    ) -> Result<(HouseholdProfile, Vec<ApplianceEntry>), ConfigError> {
        let h = &self.household;
        let profile = HouseholdProfile {
            region: h.region,
            roof_area_m2: h.roof_area_m2,
            roof_direction: h.roof_direction,
            shading: h.shading,
            system_type: h.system_type,
            battery_chemistry: h.battery_chemistry,
            backup_days: h.backup_days,
            energy_source: h.energy_source,
        };

        let mut entries = Vec::with_capacity(self.appliances.len());
        for (idx, a) in self.appliances.iter().enumerate() {
            let template = defaults.find(&a.name);
            let missing = |what: &str| ConfigError {
                field: format!("appliance[{idx}].{what}"),
                message: format!(
                    "\"{}\" is not in the appliance catalog; {what} must be given explicitly",
                    a.name
                ),
            };
            let category = a
                .category
                .or(template.map(|t| t.category))
                .ok_or_else(|| missing("category"))?;
            let rated_watts = a
                .watts
                .or(template.map(|t| t.default_watts))
                .ok_or_else(|| missing("watts"))?;
            let hours_per_day = a
                .hours_per_day
                .or(template.map(|t| t.typical_hours_per_day))
                .ok_or_else(|| missing("hours_per_day"))?;
            entries.push(ApplianceEntry {
                name: a.name.clone(),
                category,
                rated_watts,
                custom_watts: a.custom_watts,
                quantity: a.quantity,
                hours_per_day,
                critical: a.critical.or(template.map(|t| t.critical)),
            });
        }
        Ok((profile, entries))
    }

    /// Validates the scenario end to end and returns every problem found.
    ///
    /// Combines resolution failures with the engine's input validation;
    /// an empty vector means the scenario is ready to calculate.
    pub fn validate(&self, defaults: &ApplianceCatalog) -> Vec<ConfigError> {
        match self.resolve(defaults) {
            Err(e) => vec![e],
            Ok((profile, appliances)) => engine::validate(&profile, &appliances)
                .into_iter()
                .map(|issue| ConfigError {
                    field: issue.field,
                    message: issue.message,
                })
                .collect(),
        }
    }
}
