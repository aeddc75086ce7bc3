// Rust guideline compliant 2026-10-12

//! Local-time helpers. All Glowbook times are naive local times.

use crate::error::{AppError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Returns the current local time truncated to the minute.
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Resolves an optional `YYYY-MM-DDTHH:MM` override, falling back to [`local_now`].
///
/// # Errors
///
/// Returns an error if the override cannot be parsed.
pub fn resolve_now(at: Option<&str>) -> Result<NaiveDateTime> {
    match at {
        Some(value) => parse_datetime(value),
        None => Ok(local_now()),
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the value is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::InvalidInput(format!("Invalid date '{}': {}", value, e)))
}

/// Parses an `HH:MM` time.
///
/// # Errors
///
/// Returns an error if the value is not a valid time.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| AppError::InvalidInput(format!("Invalid time '{}': {}", value, e)))
}

/// Parses a `YYYY-MM-DDTHH:MM` (or space-separated) local date-time.
///
/// # Errors
///
/// Returns an error if the value matches neither form.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .map_err(|e| AppError::InvalidInput(format!("Invalid date-time '{}': {}", value, e)))
}
