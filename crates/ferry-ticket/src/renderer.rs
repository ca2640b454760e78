//! # PNG Ticket Renderer
//!
//! ## Render Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TicketRequest (from the registry)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  payload.to_qr_text() ──► encode_qr() ──► 800×800 grayscale             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  white 1080×1920 canvas ◄── overlay QR at (140, 400)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Traveler ID: <id>" centered at y = 1280                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mkdir -p <ticket_dir> ──► write traveler_<id>_ticket.png               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is synchronous. Each traveler owns one path, so there is never
//! more than one writer per file.

use image::{imageops, DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::Path;
use tracing::debug;

use ferry_core::{TicketRenderer, TicketRequest};

use crate::caption::{draw_centered, fit_scale};
use crate::error::{TicketError, TicketResult};
use crate::layout::TicketLayout;
use crate::qr::encode_qr;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Writes tickets as PNG files.
#[derive(Debug, Clone, Default)]
pub struct PngTicketRenderer {
    layout: TicketLayout,
}

impl PngTicketRenderer {
    /// Renderer with the default 1080 × 1920 layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: TicketLayout) -> Self {
        PngTicketRenderer { layout }
    }

    pub fn layout(&self) -> &TicketLayout {
        &self.layout
    }

    /// Builds the ticket image in memory.
    pub fn compose(&self, request: &TicketRequest) -> TicketResult<RgbImage> {
        let layout = &self.layout;
        let mut canvas = RgbImage::from_pixel(layout.width, layout.height, WHITE);

        let qr = encode_qr(
            &request.payload.to_qr_text(),
            layout.qr_size,
            layout.quiet_zone,
        )?;
        let qr = DynamicImage::ImageLuma8(qr).to_rgb8();
        imageops::overlay(
            &mut canvas,
            &qr,
            i64::from(layout.qr_left()),
            i64::from(layout.qr_top),
        );

        let caption = format!("Traveler ID: {}", request.traveler_id);
        let scale = fit_scale(&caption, layout.caption_width(), layout.caption_height);
        draw_centered(&mut canvas, &caption, layout.caption_top(), scale, BLACK);

        Ok(canvas)
    }
}

impl TicketRenderer for PngTicketRenderer {
    type Error = TicketError;

    fn render(&self, request: &TicketRequest) -> Result<(), Self::Error> {
        let canvas = self.compose(request)?;

        if let Some(dir) = request.path.parent() {
            fs::create_dir_all(dir)?;
        }
        canvas.save_with_format(&request.path, ImageFormat::Png)?;

        debug!(traveler_id = request.traveler_id, path = ?request.path, "Ticket written");
        Ok(())
    }
}

/// What the desk needs to know about a ticket it is about to preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketPreview {
    pub width: u32,
    pub height: u32,
}

/// Opens and decodes a ticket image.
///
/// A missing or corrupt file is an error; the desk shows it as a
/// placeholder message instead of the image.
pub fn load_ticket(path: &Path) -> TicketResult<TicketPreview> {
    let image = image::open(path)?;
    let (width, height) = image.dimensions();
    Ok(TicketPreview { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ferry_core::fare::compute_breakdown;
    use ferry_core::{PassengerStatus, PaymentStatus, TicketPayload};

    fn request(path: &Path) -> TicketRequest {
        TicketRequest {
            traveler_id: 101,
            path: path.to_path_buf(),
            payload: TicketPayload {
                title: "Montenegro Ferry Ticket".to_string(),
                currency_symbol: "₱".to_string(),
                traveler_id: 101,
                name: "Ana Reyes".to_string(),
                status: PassengerStatus::Senior,
                is_local: false,
                is_pwd: false,
                destination: "Mabini".to_string(),
                departure: None,
                fare: compute_breakdown(PassengerStatus::Senior, false, false, false),
                payment: PaymentStatus::Unpaid,
                issued_at: NaiveDate::from_ymd_opt(2026, 10, 16)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
            },
        }
    }

    #[test]
    fn test_compose_layout() {
        let renderer = PngTicketRenderer::new();
        let canvas = renderer.compose(&request(Path::new("unused.png"))).unwrap();

        assert_eq!(canvas.dimensions(), (1080, 1920));
        // Outside the QR and caption the canvas stays white
        assert_eq!(*canvas.get_pixel(10, 10), WHITE);
        assert_eq!(*canvas.get_pixel(1070, 1900), WHITE);

        let qr_dark = (400..1200)
            .flat_map(|y| (140..940).map(move |x| (x, y)))
            .any(|(x, y)| *canvas.get_pixel(x, y) == BLACK);
        assert!(qr_dark);

        let caption_dark = (1280..1360)
            .flat_map(|y| (0..1080).map(move |x| (x, y)))
            .any(|(x, y)| *canvas.get_pixel(x, y) == BLACK);
        assert!(caption_dark);
    }

    #[test]
    fn test_render_writes_png_and_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr_codes").join("traveler_101_ticket.png");

        PngTicketRenderer::new().render(&request(&path)).unwrap();

        let preview = load_ticket(&path).unwrap();
        assert_eq!(preview, TicketPreview { width: 1080, height: 1920 });
    }

    #[test]
    fn test_render_overwrites_existing_ticket() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traveler_101_ticket.png");
        let renderer = PngTicketRenderer::new();

        let mut req = request(&path);
        renderer.render(&req).unwrap();
        req.payload.payment = PaymentStatus::Paid;
        renderer.render(&req).unwrap();

        assert!(load_ticket(&path).is_ok());
    }

    #[test]
    fn test_small_layout() {
        let layout = TicketLayout {
            width: 300,
            height: 500,
            qr_size: 200,
            qr_top: 50,
            quiet_zone: 2,
            caption_gap: 20,
            caption_height: 16,
            caption_margin: 10,
        };
        let canvas = PngTicketRenderer::with_layout(layout)
            .compose(&request(Path::new("unused.png")))
            .unwrap();
        assert_eq!(canvas.dimensions(), (300, 500));
    }

    #[test]
    fn test_load_missing_ticket_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_ticket(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, TicketError::Image(_)));
    }
}
