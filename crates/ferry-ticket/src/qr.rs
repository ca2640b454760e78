//! # QR Bitmap
//!
//! The `qrcode` crate gives us the module grid; we paint it ourselves so the
//! image type always matches the one used for the canvas.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

use crate::error::{TicketError, TicketResult};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Encodes `text` and returns a `size × size` grayscale QR image with a
/// `quiet_zone`-module white border.
///
/// Version and error-correction level are picked by the encoder (level M).
pub fn encode_qr(text: &str, size: u32, quiet_zone: u32) -> TicketResult<GrayImage> {
    let code = QrCode::new(text.as_bytes()).map_err(|e| TicketError::Qr(e.to_string()))?;

    let width = code.width() as u32;
    let colors = code.to_colors();
    let modules = width + 2 * quiet_zone;

    // One pixel per module, then scale up
    let grid = GrayImage::from_fn(modules, modules, |x, y| {
        let (Some(col), Some(row)) = (x.checked_sub(quiet_zone), y.checked_sub(quiet_zone)) else {
            return LIGHT;
        };
        if col >= width || row >= width {
            return LIGHT;
        }
        match colors[(row * width + col) as usize] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    });

    Ok(imageops::resize(&grid, size, size, FilterType::Nearest))
}
