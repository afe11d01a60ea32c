//! Recipe API
//!
//! Stateless previews; confirm advances the operator's prep counter.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/recipes", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/preview", post(handler::preview))
        .route("/manual/toggle", post(handler::toggle_manual))
        .route("/confirm", post(handler::confirm))
}
