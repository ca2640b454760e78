//! # ferry-ticket: Ticket Image Rendering
//!
//! Draws a traveler's ticket: the QR-encoded payload centered on a portrait
//! canvas with the traveler id written underneath.
//!
//! ## Ticket Layout (default)
//! ```text
//! ┌──────────────── 1080 ────────────────┐
//! │                                      │
//! │                 400                  │
//! │        ┌────────────────────┐        │
//! │        │                    │        │
//! │        │    QR  800 × 800   │        │
//! │        │                    │        │
//! │        └────────────────────┘        │   1920
//! │                  80                  │
//! │          Traveler ID: 101            │
//! │                                      │
//! │                                      │
//! └──────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`layout`] - Canvas geometry
//! - [`qr`] - QR payload → grayscale bitmap
//! - [`caption`] - Bitmap-font text drawing
//! - [`renderer`] - [`PngTicketRenderer`] and ticket preview loading
//! - [`error`] - Rendering errors

pub mod caption;
pub mod error;
pub mod layout;
pub mod qr;
pub mod renderer;

pub use error::{TicketError, TicketResult};
pub use layout::TicketLayout;
pub use renderer::{load_ticket, PngTicketRenderer, TicketPreview};
