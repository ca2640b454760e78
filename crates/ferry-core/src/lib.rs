//! # ferry-core: Pure Business Logic for the Ferry E-Ticket Desk
//!
//! This crate holds every rule of the ticketing desk as pure functions and
//! plain data, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ferry E-Ticket Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Desk Shell (ferry-desk)                      │   │
//! │  │   Traveler Form ──► Ticket Preview    Admin ──► Dashboard       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ferry-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   fare    │  │  registry │  │  ticket   │  │ validation│  │   │
//! │  │   │  tiers    │  │ Traveler  │  │  payload  │  │  form     │  │   │
//! │  │   │  fees     │  │  records  │  │  text     │  │  checks   │  │   │
//! │  │   └───────────┘  └─────┬─────┘  └───────────┘  └───────────┘  │   │
//! │  │                        │ TicketRenderer (trait)                 │   │
//! │  └────────────────────────┼────────────────────────────────────────┘   │
//! │                           ▼                                             │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              ferry-ticket (QR + PNG rendering)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PassengerStatus, Traveler, PaymentStatus)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`fare`] - Fare tiers, season and PWD discounts, environmental fee
//! - [`departure`] - Departure time parsing and 12-hour display
//! - [`ticket`] - Ticket payload text and the renderer seam
//! - [`registry`] - In-memory traveler registry
//! - [`error`] - Domain error types
//! - [`validation`] - Registration form validation
//!
//! ## Example Usage
//!
//! ```rust
//! use ferry_core::fare::compute_fare;
//! use ferry_core::types::PassengerStatus;
//!
//! // Senior, non-local, no PWD card, off-season
//! let fare = compute_fare(PassengerStatus::Senior, false, false, false);
//! assert_eq!(fare.cents(), 15_400);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod departure;
pub mod error;
pub mod fare;
pub mod money;
pub mod registry;
pub mod ticket;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use departure::DepartureTime;
pub use error::{CoreError, ValidationError};
pub use fare::{compute_breakdown, compute_fare, FareBreakdown};
pub use money::Money;
pub use registry::{RegistryConfig, TravelerRegistry};
pub use ticket::{TicketPayload, TicketRenderer, TicketRequest};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First traveler id handed out in a session. Ids are never reused.
pub const FIRST_TRAVELER_ID: TravelerId = 101;

/// Surcharge for travelers who are not locals (50.00).
pub const ENVIRONMENTAL_FEE: Money = Money::from_cents(5_000);

/// Summer-season discount on the base fare, in basis points (10%).
pub const SEASON_DISCOUNT_BPS: u32 = 1_000;

/// PWD discount on the (possibly season-discounted) base fare (20%).
pub const PWD_DISCOUNT_BPS: u32 = 2_000;

/// Header line printed at the top of every ticket payload.
pub const DEFAULT_TICKET_TITLE: &str = "Montenegro Ferry Ticket";

/// Currency symbol shown on tickets and in the admin table.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";
