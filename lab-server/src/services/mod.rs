//! Services
//!
//! - [`records`] - save and search rules on top of a [`RecordStore`](crate::db::repository::RecordStore)
//! - [`share`] - share links and the QR image proxy

pub mod records;
pub mod share;

pub use records::SearchOutcome;
pub use share::{QrClient, ShareLinks};
