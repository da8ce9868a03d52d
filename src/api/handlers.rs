//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use super::AppState;
use super::types::{
    CalculateRequest, DefaultsResponse, ErrorResponse, HealthResponse, IssueBody,
};
use crate::engine;
use crate::engine::types::ResultBundle;

/// Validates the request and runs the full pipeline.
///
/// `POST /calculate` → 200 + `ResultBundle` JSON,
/// 422 + `ErrorResponse` when validation finds issues,
/// 500 + `ErrorResponse` when a stage fails.
pub async fn post_calculate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<ResultBundle>, (StatusCode, Json<ErrorResponse>)> {
    let issues = engine::validate(&req.household, &req.appliances);
    if !issues.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "invalid input".to_string(),
                issues: issues.into_iter().map(IssueBody::from).collect(),
            }),
        ));
    }

    match engine::calculate(&req.household, &req.appliances, &state.catalogs) {
        Ok(bundle) => Ok(Json(bundle)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
                issues: Vec::new(),
            }),
        )),
    }
}

/// Returns the shipped catalog snapshot and appliance templates.
///
/// `GET /defaults` → 200 + `DefaultsResponse` JSON
pub async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<DefaultsResponse> {
    Json(DefaultsResponse {
        catalogs: state.catalogs.clone(),
        appliance_templates: state.appliance_defaults.templates().to_vec(),
    })
}

/// Liveness probe.
///
/// `GET /health` → 200 + `{"status":"ok"}`
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
