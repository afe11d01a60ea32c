//! Logging Infrastructure
//!
//! Console output by default; a daily rolling file replaces it when an
//! existing log directory is given.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (info, console only)
pub fn init_logger() -> Option<WorkerGuard> {
    init_logger_with_file(None, false, None)
}

/// Initialize the logger with optional JSON format and file output
///
/// The returned guard must be held for the lifetime of the process or
/// buffered file lines are lost on exit.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&Path>,
) -> Option<WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let (writer, guard) = match log_dir {
        Some(dir) if dir.exists() => {
            let file_appender = tracing_appender::rolling::daily(dir, "lab-server");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            (Some(writer), Some(guard))
        }
        _ => (None, None),
    };

    // try_init: tests may install a subscriber more than once
    let result = match (writer, json) {
        (Some(w), true) => builder.json().with_writer(w).try_init(),
        (Some(w), false) => builder.with_writer(w).try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };
    if let Err(e) = result {
        eprintln!("logger already initialized: {e}");
    }

    guard
}
