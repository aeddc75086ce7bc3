// Rust guideline compliant 2026-10-12

//! Error types for the Glowbook core library.

use crate::models::BookingStatus;
use thiserror::Error;

/// Result type alias for Glowbook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Glowbook operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is missing or a value is out of range.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested status change is not in the transition table.
    #[error("Invalid state transition: cannot move booking from {from} to {to}")]
    InvalidTransition {
        /// Status the booking was in.
        from: BookingStatus,
        /// Status that was requested.
        to: BookingStatus,
    },

    /// Emergency booking attempted against a provider without the capability.
    #[error("Provider {0} must be premium and accept emergency bookings")]
    PremiumRequired(String),

    /// A review already exists for the booking.
    #[error("Review already exists for booking {0}")]
    DuplicateReview(String),

    /// Booking, review, provider or service not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration file or environment value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
