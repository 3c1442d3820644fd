//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tip Split                              │
//! │                                                                         │
//! │  Input line "split 0"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<BillView, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError::MustBePositive ──┐      │  │
//! │  │         │                                                │      │  │
//! │  │         ▼                                                ▼      │  │
//! │  │  Calculator Error? ─── CoreError::InvalidArgument ──── ApiError │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ─────────────────────────────────────────────► BillView│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The shell prints "error: split count must be positive" and keeps      │
//! │  reading; a front end receiving JSON switches on `code`.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use tip_core::{CoreError, ValidationError};

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "split count must be positive"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// A calculator precondition was broken
    InvalidArgument,

    /// The input line is not a known command
    UnknownCommand,

    /// Terminal I/O or serialization failed
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown command error.
    pub fn unknown_command(line: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("unknown command '{}', type 'help' for a list", line),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument { argument, reason } => {
                // Hosts clamp the split count, so this is a bug upstream
                tracing::error!(%argument, %reason, "calculator precondition violated");
                ApiError::new(
                    ErrorCode::InvalidArgument,
                    format!("invalid {}: {}", argument, reason),
                )
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("terminal I/O failed: {}", err);
        ApiError::internal("terminal I/O failed")
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("serialization failed: {}", err);
        ApiError::internal("could not serialize response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_validation_code() {
        let err: ApiError = ValidationError::MustBePositive {
            field: "split count".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "split count must be positive");
    }

    #[test]
    fn test_invalid_argument_maps_to_its_own_code() {
        let err: ApiError = CoreError::invalid_argument("split_count", "must be at least 1, got 0").into();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.message, "invalid split_count: must be at least 1, got 0");
    }

    #[test]
    fn test_wrapped_validation_unwraps() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "bill".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "bill is required");
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_value(ApiError::unknown_command("dance")).unwrap();
        assert_eq!(json["code"], "UNKNOWN_COMMAND");
        assert_eq!(
            json["message"],
            "unknown command 'dance', type 'help' for a list"
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("terminal I/O failed");
        assert_eq!(err.to_string(), "[Internal] terminal I/O failed");
    }
}
