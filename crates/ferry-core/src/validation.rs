//! # Validation Module
//!
//! Input validation for the traveler form and the admin dashboard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Desk shell                                                   │
//! │  └── Collects raw text for each form field                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields (name, status, locality, destination)             │
//! │  ├── Closed sets (status tiers, Yes/No, destinations)                  │
//! │  └── Traveler id format                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: TravelerRegistry                                             │
//! │  └── Accepts only typed values; cannot fail                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failure blocks the registration; nothing is half-stored.

use crate::error::ValidationError;
use crate::types::{PassengerStatus, TravelerId};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Registration Form
// =============================================================================

/// Raw text of the registration form, one field per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub status: String,
    pub local: String,
    pub destination: String,
    /// Empty means "No".
    pub pwd: String,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub status: PassengerStatus,
    pub is_local: bool,
    pub destination: String,
    pub is_pwd: bool,
}

impl RegistrationForm {
    /// Validates every field against the allowed destinations.
    ///
    /// ## Example
    /// ```rust
    /// use ferry_core::validation::RegistrationForm;
    /// use ferry_core::PassengerStatus;
    ///
    /// let form = RegistrationForm {
    ///     name: "Ana Reyes".into(),
    ///     status: "student".into(),
    ///     local: "yes".into(),
    ///     destination: "tingloy".into(),
    ///     pwd: String::new(),
    /// };
    /// let valid = form.validate(&["Tingloy".to_string()]).unwrap();
    /// assert_eq!(valid.status, PassengerStatus::Student);
    /// assert_eq!(valid.destination, "Tingloy");
    /// assert!(!valid.is_pwd);
    /// ```
    pub fn validate(&self, destinations: &[String]) -> ValidationResult<ValidRegistration> {
        Ok(ValidRegistration {
            name: validate_name(&self.name)?,
            status: validate_status(&self.status)?,
            is_local: parse_yes_no("local", &self.local)?,
            destination: validate_destination(&self.destination, destinations)?,
            is_pwd: parse_pwd(&self.pwd)?,
        })
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a traveler name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Any length is accepted
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(name.to_string())
}

/// Validates a status choice. Unlike [`PassengerStatus::parse_or_regular`],
/// an unknown tier is an error here.
pub fn validate_status(raw: &str) -> ValidationResult<PassengerStatus> {
    if raw.trim().is_empty() {
        return Err(ValidationError::required("status"));
    }
    raw.parse()
}

/// Parses a required Yes/No answer (`yes`, `y`, `no`, `n`, any case).
pub fn parse_yes_no(field: &str, raw: &str) -> ValidationResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Err(ValidationError::required(field)),
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: vec!["Yes".to_string(), "No".to_string()],
        }),
    }
}

/// PWD answer; blank defaults to "No".
pub fn parse_pwd(raw: &str) -> ValidationResult<bool> {
    if raw.trim().is_empty() {
        return Ok(false);
    }
    parse_yes_no("pwd", raw)
}

/// Matches a destination case-insensitively and returns its canonical
/// spelling from the configured list.
pub fn validate_destination(raw: &str, destinations: &[String]) -> ValidationResult<String> {
    let wanted = raw.trim();

    if wanted.is_empty() {
        return Err(ValidationError::required("destination"));
    }

    destinations
        .iter()
        .find(|d| d.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| ValidationError::NotAllowed {
            field: "destination".to_string(),
            allowed: destinations.to_vec(),
        })
}

/// Parses a traveler id typed by the admin.
pub fn validate_traveler_id(raw: &str) -> ValidationResult<TravelerId> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::required("traveler id"));
    }

    raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "traveler id".to_string(),
        reason: "must be a whole number".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
