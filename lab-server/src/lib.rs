//! Cosmo Lab Server - custom cosmetics preparation back-end
//!
//! An operator fills a form (customer, base formulation, five skin axes,
//! fragrance or a manual additive list). The server derives the skin type
//! code, resolves the additive recipe, assembles the declared ingredient
//! list and concept text, confirms the preparation with a prep number and
//! stores the result in an append-only record log.
//!
//! ```text
//! lab-server/src/
//! ├── core/       # config, state, server
//! ├── auth/       # operator JWT validation
//! ├── catalog/    # reference tables (embedded JSON)
//! ├── composer/   # code derivation, recipe resolution, assembly, confirm
//! ├── session.rs  # per-operator form sessions
//! ├── db/         # SurrealDB record store
//! ├── services/   # save/search rules, share links, QR proxy
//! ├── sheet/      # customer info sheet
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # logging, validation, time
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod composer;
pub mod core;
pub mod db;
pub mod services;
pub mod session;
pub mod sheet;
pub mod utils;

pub use auth::{CurrentOperator, JwtService};
pub use catalog::Catalog;
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

use tracing_appender::non_blocking::WorkerGuard;

// Security logging macro - accepts tracing field syntax
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, create the work directory and start logging
///
/// The returned guard flushes the log file on drop; keep it alive in `main`.
pub fn setup_environment() -> std::io::Result<Option<WorkerGuard>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.log_dir();
    let guard = init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        Some(log_dir.as_path()),
    );
    Ok(guard)
}

pub fn print_banner() {
    println!(
        r#"
   ______                              __          __
  / ____/___  _________ ___  ____     / /   ____ _/ /_
 / /   / __ \/ ___/ __ `__ \/ __ \   / /   / __ `/ __ \
/ /___/ /_/ (__  ) / / / / / /_/ /  / /___/ /_/ / /_/ /
\____/\____/____/_/ /_/ /_/\____/  /_____/\__,_/_.___/
    "#
    );
}
