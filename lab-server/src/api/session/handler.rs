//! Session API Handlers

use axum::extract::State;

use crate::auth::CurrentOperator;
use crate::core::ServerState;
use crate::utils::ApiResponse;

/// POST /api/session/reset - clear the counter, confirmation and saved id
pub async fn reset(State(state): State<ServerState>, operator: CurrentOperator) -> ApiResponse<()> {
    state.sessions.reset(&operator.id);
    tracing::info!(operator_id = %operator.id, "Form session reset");
    ApiResponse::ok()
}
