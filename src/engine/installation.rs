//! Installation plan: fixed phases parameterized by the selected equipment.
//!
//! No decision logic lives here; quantities and costs are substituted into
//! static templates.

use crate::engine::types::{EquipmentSelection, InstallationPhase, InstallationPlan};

/// Builds the four-phase plan for the selected equipment.
pub fn plan(equipment: &EquipmentSelection) -> InstallationPlan {
    let costs = &equipment.costs;
    let panels = equipment.panels.quantity;
    let inverter_w = equipment.inverter.total_power_w;
    let battery_count = equipment.batteries.quantity;
    let battery_chemistry = equipment.batteries.battery.chemistry.label();

    let phases = vec![
        InstallationPhase {
            name: "Site Assessment & Permits",
            duration: "3-5 days",
            description: "Regulatory compliance and site preparation",
            tasks: vec![
                "Obtain building permit from municipality".to_string(),
                "EDL interconnection application (if grid-tie)".to_string(),
                "Structural assessment of the roof".to_string(),
                "Electrical panel upgrade assessment".to_string(),
                "Equipment procurement and import clearance".to_string(),
            ],
            requirements: vec![
                "Licensed electrical engineer approval",
                "Municipal building permit",
                "Import documentation for equipment",
            ],
            cost_usd: costs.permits_usd,
        },
        InstallationPhase {
            name: "Mounting & Mechanical Installation",
            duration: "2-3 days",
            description: "Panel mounting system installation",
            tasks: vec![
                format!("Install mounting system for {panels} panels"),
                "Waterproofing of all roof penetrations".to_string(),
                "Grounding system per the electrical code".to_string(),
                "Cable management and protection".to_string(),
            ],
            requirements: vec![
                "Weather-resistant mounting hardware",
                "Proper safety equipment",
                "Electrical code compliance",
            ],
            cost_usd: costs.installation_usd,
        },
        InstallationPhase {
            name: "Electrical Installation",
            duration: "2-3 days",
            description: "Power system and battery installation",
            tasks: vec![
                format!("Install {inverter_w:.0} W inverter capacity with proper ventilation"),
                format!("Configure {battery_count}-battery bank ({battery_chemistry})"),
                "DC and AC electrical connections".to_string(),
                "Protection devices and monitoring systems".to_string(),
                "Grid interconnection (if applicable)".to_string(),
            ],
            requirements: vec![
                "Adequate ventilation for the inverter room",
                "Battery ventilation (for lead-acid banks)",
                "Surge protection devices",
            ],
            cost_usd: costs.labor_usd,
        },
        InstallationPhase {
            name: "Testing & Commissioning",
            duration: "1-2 days",
            description: "System testing and customer training",
            tasks: vec![
                "Complete electrical testing and certification".to_string(),
                "Performance verification".to_string(),
                "System monitoring setup".to_string(),
                "Customer training on operation".to_string(),
                "Warranty registration with local distributors".to_string(),
            ],
            requirements: vec![
                "Installation certificate",
                "Performance test report",
                "Warranty documentation",
            ],
            cost_usd: costs.commissioning_usd,
        },
    ];

    let soft_costs_usd =
        costs.permits_usd + costs.installation_usd + costs.labor_usd + costs.commissioning_usd;

    InstallationPlan {
        total_duration: "8-13 working days",
        phases,
        soft_costs_usd,
        post_installation: vec![
            "Monthly panel cleaning (important in dusty conditions)",
            "Quarterly battery maintenance for lead-acid banks",
            "Annual professional inspection",
            "Performance monitoring through the system interface",
            "Keep contact with the distributor for warranty service",
        ],
    }
}
