//! # Error Types
//!
//! Domain-specific error types for ferry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ferry-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Form and admin input failures                  │
//! │                                                                         │
//! │  ferry-ticket errors (separate crate)                                  │
//! │  └── TicketError      - QR encoding, PNG and file failures             │
//! │                                                                         │
//! │  Desk errors (in app)                                                  │
//! │  └── ApiError         - What the shell shows the operator              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell message          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. Every variant ends up as a message on screen.
//! Ticket rendering failures are not errors at this level: the registry keeps
//! them on the traveler record (`ticket_error`).

use thiserror::Error;

use crate::types::TravelerId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No traveler with this id was registered in the current session.
    #[error("Traveler ID {0} not found")]
    TravelerNotFound(TravelerId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These block the operation and surface to the operator as a modal-style
/// message ("Please fill in all fields!").
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. departure time that is not `HH:MM`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Shorthand for a missing field.
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
