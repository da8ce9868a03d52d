//! Default appliance templates for a typical Lebanese household.
//!
//! Scenario files may reference a template by name and only override what
//! differs (quantity, measured wattage); the resolver fills the rest from
//! this table. Critical-load tags live here instead of being inferred from
//! name substrings at calculation time.

use serde::Serialize;

use crate::site::ApplianceCategory;

/// One default appliance template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplianceTemplate {
    pub name: &'static str,
    pub category: ApplianceCategory,
    /// Typical nameplate rating of one unit (W).
    pub default_watts: f64,
    /// Typical runtime per day (h).
    pub typical_hours_per_day: f64,
    /// Whether the template counts as critical load during outages.
    pub critical: bool,
}

/// Lookup table of appliance templates.
#[derive(Debug, Clone, Serialize)]
pub struct ApplianceCatalog {
    templates: Vec<ApplianceTemplate>,
}

impl ApplianceCatalog {
    /// Builds a catalog from explicit templates.
    pub fn new(templates: Vec<ApplianceTemplate>) -> Self {
        Self { templates }
    }

    /// Case-insensitive template lookup by name.
    pub fn find(&self, name: &str) -> Option<&ApplianceTemplate> {
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// All templates in catalog order.
    pub fn templates(&self) -> &[ApplianceTemplate] {
        &self.templates
    }

    /// The shipped Lebanese household defaults.
    pub fn lebanese_household() -> Self {
        use ApplianceCategory as Cat;
        let t = |name, category, default_watts, typical_hours_per_day, critical| {
            ApplianceTemplate {
                name,
                category,
                default_watts,
                typical_hours_per_day,
                critical,
            }
        };
        Self::new(vec![
            // Lighting
            t("LED Bulbs", Cat::Lighting, 10.0, 6.0, true),
            t("Fluorescent Tubes", Cat::Lighting, 36.0, 8.0, true),
            t("Halogen Spotlights", Cat::Lighting, 50.0, 4.0, true),
            // Cooling and heating
            t("Split AC Unit", Cat::Cooling, 1500.0, 8.0, false),
            t("Window AC Unit", Cat::Cooling, 1200.0, 6.0, false),
            t("Ceiling Fan", Cat::Cooling, 75.0, 12.0, false),
            t("Portable Fan", Cat::Cooling, 50.0, 8.0, false),
            t("Electric Heater", Cat::Heating, 2000.0, 4.0, false),
            t("Electric Water Heater", Cat::Heating, 3000.0, 2.0, false),
            // Kitchen and laundry
            t("Refrigerator", Cat::Appliances, 150.0, 24.0, true),
            t("Freezer", Cat::Appliances, 200.0, 24.0, true),
            t("Microwave", Cat::Appliances, 1000.0, 0.5, false),
            t("Electric Kettle", Cat::Appliances, 2000.0, 0.25, false),
            t("Dishwasher", Cat::Appliances, 1800.0, 1.0, false),
            t("Electric Stove", Cat::Appliances, 2500.0, 1.5, false),
            t("Oven", Cat::Appliances, 3000.0, 1.0, false),
            t("Washing Machine", Cat::Appliances, 2000.0, 1.0, false),
            t("Dryer", Cat::Appliances, 3000.0, 1.0, false),
            t("Iron", Cat::Appliances, 1500.0, 0.5, false),
            // Water
            t("Water Pump", Cat::Pumping, 1000.0, 1.0, false),
            // Electronics and entertainment
            t("LED TV", Cat::Entertainment, 100.0, 6.0, false),
            t("Satellite Receiver", Cat::Entertainment, 25.0, 8.0, false),
            t("Sound System", Cat::Entertainment, 150.0, 3.0, false),
            t("Desktop Computer", Cat::Electronics, 300.0, 8.0, true),
            t("Laptop", Cat::Electronics, 65.0, 6.0, true),
            t("Router/Modem", Cat::Electronics, 15.0, 24.0, true),
            t("Phone Chargers", Cat::Electronics, 10.0, 4.0, true),
            // Security and communication
            t("Security System", Cat::Electronics, 50.0, 24.0, true),
            t("Intercom System", Cat::Electronics, 20.0, 24.0, true),
        ])
    }
}
