//! Utility module
//!
//! - [`AppError`] / [`ApiResponse`] re-exported from `shared::error`
//! - logging setup, input validation, business-timezone helpers

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
