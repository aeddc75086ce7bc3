// Rust guideline compliant 2026-10-12

//! Response envelopes for machine-readable command output.

use crate::error::{core_details, AppError, ErrorCode};
use glowbook_core::Error as CoreError;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }

    /// Creates an error envelope from a core error.
    #[must_use]
    pub fn from_core(error: &CoreError) -> Self {
        Self {
            code: ErrorCode::from(error),
            message: error.to_string(),
            details: core_details(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_envelope_carries_code_and_details() {
        let envelope = ErrorEnvelope::from_core(&CoreError::DuplicateReview("bkg-1".to_string()));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["code"], "duplicate_review");
        assert_eq!(value["details"]["booking_id"], "bkg-1");
    }

    #[test]
    fn test_success_envelope_shape() {
        let value = serde_json::to_value(SuccessEnvelope::new(3)).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "ok", "result": 3 }));
    }
}
