// Rust guideline compliant 2026-10-12

//! Listing and filtering helpers for Glowbook.

use crate::error::{AppError, Result};
use crate::time::parse_date;
use glowbook_core::{BookingFilter, BookingStatus};

/// Raw list options as supplied by a caller.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status name.
    pub status: Option<String>,
    /// Filter by date >= `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Filter by date <= `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Only urgent bookings.
    pub emergency_only: bool,
}

impl ListOptions {
    /// Parses the options into a [`BookingFilter`].
    ///
    /// # Errors
    ///
    /// Returns an error if a status or date is invalid or `from` is after `to`.
    pub fn to_filter(&self) -> Result<BookingFilter> {
        let status = self.status.as_deref().map(parse_status).transpose()?;
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;

        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(AppError::InvalidInput(format!(
                    "--from {} is after --to {}",
                    from, to
                )));
            }
        }

        Ok(BookingFilter {
            status,
            from,
            to,
            emergency_only: self.emergency_only,
        })
    }
}

/// Parses a status string into a `BookingStatus` value.
///
/// Accepts the persisted names plus `no-show` and `canceled`.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn parse_status(value: &str) -> Result<BookingStatus> {
    match value.trim().to_lowercase().as_str() {
        "pending" => Ok(BookingStatus::Pending),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "completed" => Ok(BookingStatus::Completed),
        "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
        "no_show" | "no-show" | "noshow" => Ok(BookingStatus::NoShow),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid status filter: {}",
            value
        ))),
    }
}
