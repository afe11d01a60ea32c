//! Operator authentication
//!
//! - [`JwtService`] - token validation
//! - [`CurrentOperator`] - operator identity from the token claims
//! - [`require_auth`] - middleware guarding `/api/*`

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentOperator, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
