//! # Domain Types
//!
//! Core domain types for the ferry desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Traveler     │   │ PassengerStatus │   │  PaymentStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (101, ...)  │   │  Infant         │   │  Unpaid ──┐     │       │
//! │  │  name           │   │  Child          │   │           ▼     │       │
//! │  │  status         │   │  Student        │   │  Paid (final)   │       │
//! │  │  fare           │   │  Regular        │   └─────────────────┘       │
//! │  │  payment        │   │  Senior         │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Sequential traveler id, starting at [`crate::FIRST_TRAVELER_ID`].
pub type TravelerId = u32;

// =============================================================================
// Passenger Status
// =============================================================================

/// Fare tier of a traveler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PassengerStatus {
    Infant,
    Child,
    Student,
    Regular,
    Senior,
}

impl PassengerStatus {
    /// All tiers in the order the registration form lists them.
    pub const ALL: [PassengerStatus; 5] = [
        PassengerStatus::Infant,
        PassengerStatus::Child,
        PassengerStatus::Student,
        PassengerStatus::Regular,
        PassengerStatus::Senior,
    ];

    /// Title-cased label, as printed on tickets and in the admin table.
    pub const fn label(&self) -> &'static str {
        match self {
            PassengerStatus::Infant => "Infant",
            PassengerStatus::Child => "Child",
            PassengerStatus::Student => "Student",
            PassengerStatus::Regular => "Regular",
            PassengerStatus::Senior => "Senior",
        }
    }

    /// Parses a status, falling back to `Regular` for anything unknown.
    ///
    /// This is the documented default of the fare table: a tier nobody
    /// recognizes pays the regular fare. Forms should prefer the strict
    /// [`FromStr`] impl so typos are reported instead.
    ///
    /// ## Example
    /// ```rust
    /// use ferry_core::types::PassengerStatus;
    ///
    /// assert_eq!(PassengerStatus::parse_or_regular("SENIOR"), PassengerStatus::Senior);
    /// assert_eq!(PassengerStatus::parse_or_regular("vip"), PassengerStatus::Regular);
    /// ```
    pub fn parse_or_regular(raw: &str) -> Self {
        raw.parse().unwrap_or(PassengerStatus::Regular)
    }
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive parse; surrounding whitespace is ignored.
impl FromStr for PassengerStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PassengerStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: PassengerStatus::ALL
                    .iter()
                    .map(|s| s.label().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Payment state machine of a ticket: `Unpaid` → `Paid`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

impl PaymentStatus {
    #[inline]
    pub const fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    /// Wording inside the QR payload.
    pub const fn ticket_label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "✓ PAID",
            PaymentStatus::Unpaid => "Not Paid",
        }
    }

    /// Wording in the admin table's "Paid" column.
    pub const fn table_label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "✓ Paid",
            PaymentStatus::Unpaid => "Not Paid",
        }
    }
}

// =============================================================================
// Traveler
// =============================================================================

/// A registered traveler, owned by the registry.
///
/// Fields are private: the only mutation after registration is payment
/// confirmation (and bookkeeping of the last rendering failure), both driven
/// by [`crate::registry::TravelerRegistry`].
#[derive(Debug, Clone)]
pub struct Traveler {
    pub(crate) id: TravelerId,
    pub(crate) name: String,
    pub(crate) status: PassengerStatus,
    pub(crate) is_local: bool,
    pub(crate) destination: String,
    pub(crate) is_pwd: bool,
    /// Season flag in effect at registration; the fare is tied to it.
    pub(crate) summer_fare: bool,
    pub(crate) fare: Money,
    pub(crate) payment: PaymentStatus,
    pub(crate) ticket_image_path: PathBuf,
    pub(crate) ticket_error: Option<String>,
}

impl Traveler {
    #[inline]
    pub fn id(&self) -> TravelerId {
        self.id
    }

    #[inline]
    pub fn fare(&self) -> Money {
        self.fare
    }

    #[inline]
    pub fn is_paid(&self) -> bool {
        self.payment.is_paid()
    }

    /// Immutable value copy for callers outside the registry.
    pub fn snapshot(&self) -> TravelerSnapshot {
        TravelerSnapshot {
            id: self.id,
            name: self.name.clone(),
            status: self.status,
            is_local: self.is_local,
            destination: self.destination.clone(),
            fare_cents: self.fare.cents(),
            is_paid: self.payment.is_paid(),
            is_pwd: self.is_pwd,
            ticket_image_path: self.ticket_image_path.display().to_string(),
            ticket_error: self.ticket_error.clone(),
        }
    }
}

/// Read-only copy of a traveler record, returned by `list_all` and `find`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TravelerSnapshot {
    pub id: TravelerId,
    pub name: String,
    pub status: PassengerStatus,
    pub is_local: bool,
    pub destination: String,
    /// Stored fare in centavos.
    pub fare_cents: i64,
    pub is_paid: bool,
    pub is_pwd: bool,
    pub ticket_image_path: String,
    /// Last rendering failure for this ticket, if any.
    pub ticket_error: Option<String>,
}

impl TravelerSnapshot {
    #[inline]
    pub fn fare(&self) -> Money {
        Money::from_cents(self.fare_cents)
    }

    #[inline]
    pub fn payment_status(&self) -> PaymentStatus {
        if self.is_paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
