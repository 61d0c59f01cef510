use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::math::lerp_trunc_u8;
use crate::theme::palette::SKY_STOPS;

/// Color of row `y` in a sky of `height` rows.
pub(crate) fn sky_row_color(y: u32, height: u32) -> Rgb8 {
    let sections = SKY_STOPS.len() - 1;
    let band_h = f64::from(height.max(1)) / sections as f64;
    let band = ((f64::from(y) / band_h) as usize).min(sections - 1);
    let t = (f64::from(y) - band as f64 * band_h) / band_h;

    let a = SKY_STOPS[band];
    let b = SKY_STOPS[band + 1];
    [
        lerp_trunc_u8(a[0], b[0], t),
        lerp_trunc_u8(a[1], b[1], t),
        lerp_trunc_u8(a[2], b[2], t),
    ]
}

/// Overwrite the canvas with the sunset gradient.
pub(crate) fn draw_sky(canvas: &mut RgbImage) {
    let (w, h) = canvas.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let row_len = w as usize * 3;
    for (y, row) in canvas.chunks_exact_mut(row_len).enumerate() {
        let c = sky_row_color(y as u32, h);
        for px in row.chunks_exact_mut(3) {
            px.copy_from_slice(&c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sky.rs"]
mod tests;
