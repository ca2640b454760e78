//! # API Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Ferry Desk                         │
//! │                                                                         │
//! │  Shell                       Commands                                   │
//! │  ─────                       ────────                                   │
//! │                                                                         │
//! │  pay 105                                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Not logged in? ─── ApiError::unauthorized() ──────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Unknown id? ─── CoreError::TravelerNotFound ──── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  Error: Traveler ID 105 not found                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors carry a machine-readable `code` (used by the JSON export and
//! tests) and the message the desk prints.

use serde::Serialize;
use thiserror::Error;

use ferry_core::{CoreError, TravelerId, ValidationError};
use ferry_ticket::TicketError;

/// Error returned from desk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Traveler ID 105 not found"
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

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Traveler not found
    NotFound,

    /// Form or admin input failed validation
    ValidationError,

    /// Admin command without a session, or wrong password
    Unauthorized,

    /// Ticket image could not be written or read
    TicketError,

    /// Internal error
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

    /// Creates a not found error for a traveler id.
    pub fn not_found(id: TravelerId) -> Self {
        ApiError::from(CoreError::TravelerNotFound(id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TravelerNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

/// Converts validation errors to API errors.
///
/// Missing fields share one message, matching the registration form prompt.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Required { .. } => ApiError::validation("Please fill in all fields!"),
            other => ApiError::validation(other.to_string()),
        }
    }
}

/// Converts ticket rendering errors to API errors.
impl From<TicketError> for ApiError {
    fn from(err: TicketError) -> Self {
        tracing::warn!(error = %err, "Ticket error");
        ApiError::new(ErrorCode::TicketError, err.to_string())
    }
}
