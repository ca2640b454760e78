//! # Canvas Geometry
//!
//! All positions are in pixels from the top-left corner.

/// Geometry of a rendered ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketLayout {
    pub width: u32,
    pub height: u32,
    /// Edge length of the square QR image.
    pub qr_size: u32,
    /// Top edge of the QR image.
    pub qr_top: u32,
    /// White border around the QR matrix, in modules.
    pub quiet_zone: u32,
    /// Space between the QR image and the caption.
    pub caption_gap: u32,
    /// Largest glyph height for the caption.
    pub caption_height: u32,
    /// Minimum space kept free on both sides of the caption.
    pub caption_margin: u32,
}

impl Default for TicketLayout {
    /// 1080 × 1920 portrait, matching a phone screen.
    fn default() -> Self {
        TicketLayout {
            width: 1080,
            height: 1920,
            qr_size: 800,
            qr_top: 400,
            quiet_zone: 2,
            caption_gap: 80,
            caption_height: 80,
            caption_margin: 40,
        }
    }
}

impl TicketLayout {
    /// Left edge that centers the QR image horizontally.
    pub fn qr_left(&self) -> u32 {
        self.width.saturating_sub(self.qr_size) / 2
    }

    /// Top edge of the caption line.
    pub fn caption_top(&self) -> u32 {
        self.qr_top + self.qr_size + self.caption_gap
    }

    /// Width available to the caption.
    pub fn caption_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.caption_margin)
    }
}
