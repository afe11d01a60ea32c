//! Data models
//!
//! Shared between lab-server and front-end (via API).

pub mod catalog;
pub mod recipe;
pub mod record;
pub mod sheet;
pub mod skin;

// Re-exports
pub use catalog::*;
pub use recipe::*;
pub use record::*;
pub use sheet::*;
pub use skin::*;
