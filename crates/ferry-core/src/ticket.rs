//! # Ticket Payload
//!
//! Builds the text block encoded into a ticket's QR code, and defines the
//! seam through which the registry asks for ticket images.
//!
//! ## Payload Layout
//! ```text
//! === Montenegro Ferry Ticket ===
//! Traveler ID: 101
//! Name: Ana Reyes
//! Status: Student
//! Local: Yes
//! PWD: Yes (20% Discount Applied)
//! Destination: Tingloy
//! Departure Time: 2:30 PM
//! Fare: ₱83.00
//! Environmental Fee: ₱0.00
//! Total Fare: ₱83.00
//! Payment Status: Not Paid
//! Issue Date: 2026-10-16 09:12:44
//! ```
//!
//! Amounts are truncated to whole pesos here, unlike the admin table.

use chrono::NaiveDateTime;
use std::path::PathBuf;

use crate::departure::{display_departure, DepartureTime};
use crate::fare::FareBreakdown;
use crate::types::{PassengerStatus, PaymentStatus, TravelerId};

/// Everything printed inside the QR code.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketPayload {
    pub title: String,
    pub currency_symbol: String,
    pub traveler_id: TravelerId,
    pub name: String,
    pub status: PassengerStatus,
    pub is_local: bool,
    pub is_pwd: bool,
    pub destination: String,
    pub departure: Option<DepartureTime>,
    pub fare: FareBreakdown,
    pub payment: PaymentStatus,
    pub issued_at: NaiveDateTime,
}

impl TicketPayload {
    /// Renders the payload as the newline-separated QR text.
    pub fn to_qr_text(&self) -> String {
        let symbol = self.currency_symbol.as_str();
        let pwd_line = if self.is_pwd {
            "PWD: Yes (20% Discount Applied)"
        } else {
            "PWD: No"
        };

        [
            format!("=== {} ===", self.title),
            format!("Traveler ID: {}", self.traveler_id),
            format!("Name: {}", self.name),
            format!("Status: {}", self.status.label()),
            format!("Local: {}", yes_no(self.is_local)),
            pwd_line.to_string(),
            format!("Destination: {}", title_case(&self.destination)),
            format!("Departure Time: {}", display_departure(self.departure)),
            format!("Fare: {}", self.fare.base.format_truncated(symbol)),
            format!(
                "Environmental Fee: {}",
                self.fare.environmental_fee.format_truncated(symbol)
            ),
            format!("Total Fare: {}", self.fare.total.format_truncated(symbol)),
            format!("Payment Status: {}", self.payment.ticket_label()),
            format!("Issue Date: {}", self.issued_at.format("%Y-%m-%d %H:%M:%S")),
        ]
        .join("\n")
    }
}

/// A request to (re)draw one traveler's ticket image.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRequest {
    pub traveler_id: TravelerId,
    pub path: PathBuf,
    pub payload: TicketPayload,
}

/// Produces the ticket artifact for a request.
///
/// The registry calls this on registration and on payment. Implementations
/// own all I/O; ferry-core only describes what to draw.
pub trait TicketRenderer {
    type Error: std::error::Error;

    fn render(&self, request: &TicketRequest) -> Result<(), Self::Error>;
}

/// `"Yes"` / `"No"`, as used across tickets and the admin table.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Capitalizes the first letter of every run of letters and lowercases the
/// rest: `"san juan"` → `"San Juan"`, `"o'NEIL"` → `"O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
