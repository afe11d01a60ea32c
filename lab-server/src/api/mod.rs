//! API routes
//!
//! - [`health`] - liveness (public)
//! - [`catalog`] - reference tables for the form
//! - [`recipes`] - preview, manual toggle, confirm
//! - [`session`] - form session reset
//! - [`records`] - save, search, load, sheet, QR
//!
//! Every route except `/api/health` requires an operator token.

pub mod catalog;
pub mod health;
pub mod recipes;
pub mod records;
pub mod session;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router, middleware};
use shared::error::ErrorCode;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::utils::AppError;

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::with_message(ErrorCode::TimeoutError, "Request timed out")
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(catalog::router())
        .merge(recipes::router())
        .merge(session::router())
        .merge(records::router())
}

/// Full router with auth, tracing, request ids, CORS and compression
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_app()
        // require_auth skips public routes itself
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(timeout),
        )
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
