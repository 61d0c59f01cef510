use image::RgbImage;

use crate::foundation::math::{clamp_u8, luma601};

pub(crate) const SATURATION: f32 = 1.2;
pub(crate) const CONTRAST: f32 = 1.05;

fn luma_u8(px: &[u8]) -> f32 {
    luma601(px[0], px[1], px[2]).round()
}

/// Push each channel away from its pixel's gray level by `factor`.
pub(crate) fn saturate(canvas: &mut RgbImage, factor: f32) {
    for px in canvas.chunks_exact_mut(3) {
        let l = luma_u8(px);
        for c in px.iter_mut() {
            *c = clamp_u8(l + (f32::from(*c) - l) * factor);
        }
    }
}

/// Rounded mean gray level of the canvas.
pub(crate) fn mean_luma(canvas: &RgbImage) -> f32 {
    let n = (canvas.width() as u64) * (canvas.height() as u64);
    if n == 0 {
        return 0.0;
    }
    let sum: u64 = canvas
        .chunks_exact(3)
        .map(|px| luma_u8(px) as u64)
        .sum();
    (sum as f64 / n as f64).round() as f32
}

/// Push every channel away from the mean gray level by `factor`.
pub(crate) fn contrast(canvas: &mut RgbImage, factor: f32) {
    let mean = mean_luma(canvas);
    for c in canvas.iter_mut() {
        *c = clamp_u8(mean + (f32::from(*c) - mean) * factor);
    }
}

/// Saturation then contrast boost.
pub(crate) fn color_boost(canvas: &mut RgbImage) {
    saturate(canvas, SATURATION);
    contrast(canvas, CONTRAST);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color.rs"]
mod tests;
