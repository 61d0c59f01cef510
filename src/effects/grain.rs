use image::RgbImage;
use rand::Rng;

use crate::foundation::math::mul_div255_u8;

pub(crate) const SCANLINE_SPACING: u32 = 3;
/// `floor(255 * 0.12)`.
pub(crate) const SCANLINE_ALPHA: u8 = 30;
/// `floor(255 * 0.03)`.
pub(crate) const NOISE_RANGE: i16 = 7;

/// Darken every `spacing`-th row, starting at row 0, with black at `alpha`.
pub(crate) fn scanlines(canvas: &mut RgbImage, spacing: u32, alpha: u8) {
    let row_len = canvas.width() as usize * 3;
    if row_len == 0 || spacing == 0 {
        return;
    }
    let keep = 255 - u16::from(alpha);
    for row in canvas.chunks_exact_mut(row_len).step_by(spacing as usize) {
        for c in row.iter_mut() {
            *c = mul_div255_u8(u16::from(*c), keep);
        }
    }
}

/// Monochrome grain: one draw in `[-range, range]` per pixel, added to all three channels.
pub(crate) fn noise(canvas: &mut RgbImage, range: i16, rng: &mut impl Rng) {
    if range <= 0 {
        return;
    }
    for px in canvas.chunks_exact_mut(3) {
        let n = rng.random_range(-range..=range);
        for c in px.iter_mut() {
            *c = (i16::from(*c) + n).clamp(0, 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/grain.rs"]
mod tests;
