//! Catalog API Handlers

use axum::extract::State;
use shared::models::CatalogView;

use crate::core::ServerState;
use crate::utils::ApiResponse;

/// GET /api/catalog - bases, fragrances, additive menu, skin axes, precautions
pub async fn get_catalog(State(state): State<ServerState>) -> ApiResponse<CatalogView> {
    ApiResponse::success(state.catalog.view())
}
