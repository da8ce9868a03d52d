//! REST API over the calculation engine.
//!
//! Provides three endpoints:
//! - `POST /calculate` — validate a site, run the pipeline, return the bundle
//! - `GET /defaults` — shipped catalog snapshot and appliance templates
//! - `GET /health` — liveness probe

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::catalog::{ApplianceCatalog, Catalogs};

/// Immutable application state shared across all request handlers.
///
/// The catalogs are read-only for the process lifetime, so a plain `Arc`
/// suffices — no locks.
pub struct AppState {
    /// Reference tables the engine calculates against.
    pub catalogs: Catalogs,
    /// Appliance templates exposed to clients for form defaults.
    pub appliance_defaults: ApplianceCatalog,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/calculate", post(handlers::post_calculate))
        .route("/defaults", get(handlers::get_defaults))
        .route("/health", get(handlers::get_health))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
