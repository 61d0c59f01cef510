//! Built-in 5x7 bitmap font used when no font file can be loaded.
//!
//! Lower-case letters render as upper-case; characters without a glyph render as a hollow box.

use crate::foundation::core::Rgb8;
use crate::raster::layer::paint_color;

pub(crate) const GLYPH_COLS: u32 = 5;
pub(crate) const GLYPH_ROWS: u32 = 7;
/// Horizontal advance in cells (glyph plus one blank column).
pub(crate) const ADVANCE_COLS: u32 = 6;
/// Line height in cells (glyph plus one blank row).
pub(crate) const LINE_ROWS: u32 = 8;

const BOX: [u8; GLYPH_ROWS as usize] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// Row bitmaps of `c`, bit 4 is the leftmost column.
pub(crate) fn glyph(c: char) -> [u8; GLYPH_ROWS as usize] {
    match c.to_ascii_uppercase() {
        ' ' => [0; 7],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '\'' => [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        _ => BOX,
    }
}

/// Size of one font cell for a nominal font size in pixels.
pub(crate) fn cell_px(size_px: f32) -> f64 {
    (f64::from(size_px) / f64::from(LINE_ROWS)).max(1.0)
}

/// Rendered extent of `text` as `(width, height)`.
pub(crate) fn measure(text: &str, size_px: f32) -> (f64, f64) {
    let cell = cell_px(size_px);
    let n = text.chars().count() as f64;
    let w = if n > 0.0 {
        (n * f64::from(ADVANCE_COLS) - 1.0) * cell
    } else {
        0.0
    };
    (w, f64::from(LINE_ROWS) * cell)
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub(crate) fn draw(
    ctx: &mut vello_cpu::RenderContext,
    text: &str,
    size_px: f32,
    color: Rgb8,
    x: f64,
    y: f64,
) {
    let cell = cell_px(size_px);
    ctx.set_paint(paint_color(color, 255));
    for (i, c) in text.chars().enumerate() {
        let gx = x + (i as f64) * f64::from(ADVANCE_COLS) * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let px = gx + f64::from(col) * cell;
                let py = y + (row as f64) * cell;
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(px, py, px + cell, py + cell));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bitmap_font.rs"]
mod tests;
