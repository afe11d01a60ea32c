//! Health route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/health | GET | none |
//!
//! ```json
//! { "code": 0, "message": "Success", "data": { "status": "healthy", "version": "0.1.0", "catalog_version": "2024-05", "store_ready": true } }
//! ```

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::ApiResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    catalog_version: String,
    /// False when the record store failed to open
    store_ready: bool,
}

/// GET /api/health - liveness and catalog version
pub async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    let store_ready = state.records().is_some();
    ApiResponse::success(HealthResponse {
        status: if store_ready { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        catalog_version: state.catalog.version().to_string(),
        store_ready,
    })
}
