//! Record API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/records | POST | save the confirmed recipe |
//! | /api/records?customer_name= | GET | search by customer |
//! | /api/records/{id} | GET | record and its form draft |
//! | /api/records/{id}/sheet | GET | info sheet (`?format=text` or `document`) |
//! | /api/records/{id}/qr | GET | QR PNG for the share link |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/records", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::search).post(handler::save))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/sheet", get(handler::sheet))
        .route("/{id}/qr", get(handler::qr))
}
