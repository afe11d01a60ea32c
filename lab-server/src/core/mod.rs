//! Core module - configuration, state and the HTTP server
//!
//! - [`Config`] - environment configuration
//! - [`ServerState`] - shared services
//! - [`Server`] - HTTP listener

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
