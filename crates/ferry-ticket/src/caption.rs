//! # Caption Drawing
//!
//! Writes short ASCII captions with the 8x8 glyphs from `font8x8`, scaled up
//! by an integer factor. Characters without a glyph are drawn as blanks.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

/// Glyph cell edge in font pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Width in pixels of `text` at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Largest scale that keeps `text` within `max_width` and its glyphs at most
/// `max_height` tall. Never below 1.
pub fn fit_scale(text: &str, max_width: u32, max_height: u32) -> u32 {
    let by_height = max_height / GLYPH_SIZE;
    let by_width = match text_width(text, 1) {
        0 => by_height,
        w => max_width / w,
    };
    by_height.min(by_width).max(1)
}

/// Draws `text` with its top-left corner at (`x`, `y`).
///
/// Pixels falling outside the canvas are skipped.
pub fn draw_text(canvas: &mut RgbImage, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    let (width, height) = canvas.dimensions();
    let cell = GLYPH_SIZE * scale;

    for (index, c) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(c) else {
            continue;
        };
        let origin_x = x + index as u32 * cell;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Bit 0 is the leftmost pixel of the row
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = origin_x + col * scale;
                let py = y + row as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (cx, cy) = (px + dx, py + dy);
                        if cx < width && cy < height {
                            canvas.put_pixel(cx, cy, color);
                        }
                    }
                }
            }
        }
    }
}

/// Draws `text` horizontally centered on the canvas at row `y`.
pub fn draw_centered(canvas: &mut RgbImage, text: &str, y: u32, scale: u32, color: Rgb<u8>) {
    let x = canvas.width().saturating_sub(text_width(text, scale)) / 2;
    draw_text(canvas, text, x, y, scale, color);
}
