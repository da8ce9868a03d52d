//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::catalog::{ApplianceTemplate, Catalogs};
use crate::engine::ValidationIssue;
use crate::site::{ApplianceEntry, HouseholdProfile};

/// Body of `POST /calculate`.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Household and system parameters.
    pub household: HouseholdProfile,
    /// Fully-specified appliance entries.
    pub appliances: Vec<ApplianceEntry>,
}

/// One validation issue in an error body.
#[derive(Debug, Serialize)]
pub struct IssueBody {
    /// Dotted field path.
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl From<ValidationIssue> for IssueBody {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            field: issue.field,
            message: issue.message,
        }
    }
}

/// Error body for 4xx/5xx responses; `issues` is empty unless the request
/// failed validation.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
    /// Validation issues, when applicable.
    pub issues: Vec<IssueBody>,
}

/// Body of `GET /defaults`: the shipped reference data.
#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    /// Region, equipment, and tariff tables.
    pub catalogs: Catalogs,
    /// Appliance templates for client-side form defaults.
    pub appliance_templates: Vec<ApplianceTemplate>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
