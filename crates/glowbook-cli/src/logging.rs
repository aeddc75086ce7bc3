// Rust guideline compliant 2026-10-12

//! Diagnostic logging setup for the `glow` binary.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_tracing(level: Level, json: bool) {
    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return;
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
