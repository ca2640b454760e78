//! # Ticket Error Types
//!
//! ## Error Flow
//! ```text
//! qrcode / image / std::io failure
//!       │
//!       ▼
//! TicketError (this module)
//!       │
//!       ├──► registry: kept on the traveler as `ticket_error`
//!       │
//!       └──► desk preview: "Error loading QR: ..."
//! ```

use thiserror::Error;

/// Failures while producing or reading a ticket image.
#[derive(Debug, Error)]
pub enum TicketError {
    /// The payload does not fit in any QR version.
    #[error("QR encoding failed: {0}")]
    Qr(String),

    /// PNG encoding or decoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The ticket directory or file could not be written.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with TicketError.
pub type TicketResult<T> = Result<T, TicketError>;
