//! API surface tests, compiled only with the `api` feature.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use common::{family_appliances, family_profile};
use pv_sizer::api::{AppState, router};
use pv_sizer::catalog::{ApplianceCatalog, Catalogs};

fn state() -> Arc<AppState> {
    Arc::new(AppState {
        catalogs: Catalogs::lebanon(),
        appliance_defaults: ApplianceCatalog::lebanese_household(),
    })
}

#[tokio::test]
async fn calculate_round_trips_through_json() {
    let app = router(state());
    let body = serde_json::json!({
        "household": family_profile(),
        "appliances": family_appliances(),
    });
    let req = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // The bundle carries every pipeline stage.
    for key in [
        "site",
        "load",
        "sizing",
        "equipment",
        "monthly_production",
        "economics",
        "installation",
        "appliances",
        "recommendations",
    ] {
        assert!(json.get(key).is_some(), "missing bundle key {key}");
    }
    assert_eq!(json.pointer("/site/region"), Some(&serde_json::json!("mount_lebanon")));
}

#[tokio::test]
async fn validation_errors_surface_as_422() {
    let app = router(state());
    let mut profile = family_profile();
    profile.region = None;
    let body = serde_json::json!({
        "household": profile,
        "appliances": [],
    });
    let req = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let issues = json.pointer("/issues").and_then(|v| v.as_array());
    // Region and appliance-list issues both appear.
    assert!(issues.map(|v| v.len() >= 2).unwrap_or(false), "body: {json}");
}
