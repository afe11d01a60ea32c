//! Operator extractor

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::CurrentOperator;
use crate::auth::middleware::authenticate;
use crate::core::ServerState;
use crate::utils::AppError;

/// Reuses the operator injected by `require_auth`, or validates the header
/// itself when the route is mounted without the middleware
impl FromRequestParts<ServerState> for CurrentOperator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(operator) = parts.extensions.get::<CurrentOperator>() {
            return Ok(operator.clone());
        }

        let operator = authenticate(state.jwt_service(), &parts.headers, &parts.uri)?;
        parts.extensions.insert(operator.clone());
        Ok(operator)
    }
}
