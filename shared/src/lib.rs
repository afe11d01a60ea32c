//! Shared types for the cosmetics lab
//!
//! Domain models and the unified error system used by `lab-server`
//! and by any client talking to its HTTP API.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
