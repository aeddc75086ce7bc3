// Rust guideline compliant 2026-10-12

//! Error handling for Glowbook application services.

use glowbook_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and envelope responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested booking, review, provider or service was not found.
    NotFound,
    /// The requested status transition is invalid.
    InvalidTransition,
    /// Input validation failed.
    ValidationError,
    /// Emergency booking against a provider without the capability.
    PremiumRequired,
    /// A review already exists for the booking.
    DuplicateReview,
    /// Configuration is invalid.
    InvalidConfig,
    /// IO failure while reading or writing repository data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The repository has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// The actor may not perform the operation.
    NotPermitted,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Glowbook repository not initialized at {path}. Run 'glow init' first.")]
    RepoNotInitialized {
        /// Path where `.glowbook` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The actor is not a party allowed to perform the operation.
    #[error("Not permitted: {0}")]
    NotPermitted(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NotPermitted(_) => ErrorCode::NotPermitted,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => ErrorCode::from(core),
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(core) => core_details(core),
            _ => None,
        }
    }
}

impl From<&CoreError> for ErrorCode {
    fn from(error: &CoreError) -> Self {
        match error {
            CoreError::NotFound(_) => ErrorCode::NotFound,
            CoreError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::PremiumRequired(_) => ErrorCode::PremiumRequired,
            CoreError::DuplicateReview(_) => ErrorCode::DuplicateReview,
            CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            CoreError::Io(_) => ErrorCode::IoError,
            CoreError::Json(_) => ErrorCode::JsonError,
        }
    }
}

pub(crate) fn core_details(error: &CoreError) -> Option<serde_json::Value> {
    match error {
        CoreError::InvalidTransition { from, to } => Some(serde_json::json!({
            "from": from,
            "to": to,
            "allowed": from.valid_transitions(),
        })),
        CoreError::PremiumRequired(provider_id) => Some(serde_json::json!({
            "provider_id": provider_id,
        })),
        CoreError::DuplicateReview(booking_id) => Some(serde_json::json!({
            "booking_id": booking_id,
        })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbook_core::BookingStatus;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = AppError::from(CoreError::InvalidTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Cancelled,
        });
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
        let details = err.details().unwrap();
        assert_eq!(details["from"], "completed");
        assert_eq!(details["allowed"], serde_json::json!([]));

        let err = AppError::from(CoreError::PremiumRequired("prov-1".to_string()));
        assert_eq!(err.code(), ErrorCode::PremiumRequired);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::RepoNotInitialized).unwrap();
        assert_eq!(json, "\"repo_not_initialized\"");
    }
}
