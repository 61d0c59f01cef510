use image::RgbImage;

pub(crate) const STRENGTH: f64 = 0.35;
const STEPS: usize = 50;
const REACH: f64 = 0.8;
/// Divisor of the post-multiply renormalization.
const RENORM: u32 = 200;

/// Mask value of each concentric ellipse, outermost first.
pub(crate) fn ellipse_levels(strength: f64) -> [u8; STEPS] {
    std::array::from_fn(|i| {
        let inv = 1.0 - i as f64 / STEPS as f64;
        (255.0 * (1.0 - strength * inv.powf(1.5))) as u8
    })
}

/// Mask value at `(x, y)`: the innermost ellipse covering the pixel wins, 255 outside all.
pub(crate) fn mask_at(x: u32, y: u32, width: u32, height: u32, levels: &[u8; STEPS]) -> u8 {
    let cx = f64::from((width / 2).max(1));
    let cy = f64::from((height / 2).max(1));
    let dx = (f64::from(x) - f64::from(width / 2)) / cx;
    let dy = (f64::from(y) - f64::from(height / 2)) / cy;
    let d = dx.hypot(dy);

    // Ellipse i spans 1 + REACH * (1 - i / STEPS) half-extents.
    let i_max = (STEPS as f64 * (1.0 - (d - 1.0) / REACH)).floor();
    if i_max < 0.0 {
        return 255;
    }
    levels[(i_max as usize).min(STEPS - 1)]
}

/// Darken toward the corners, then renormalize by `255 / 200`.
pub(crate) fn vignette(canvas: &mut RgbImage, strength: f64) {
    let (w, h) = canvas.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let levels = ellipse_levels(strength);
    for (i, px) in canvas.chunks_exact_mut(3).enumerate() {
        let x = (i % w as usize) as u32;
        let y = (i / w as usize) as u32;
        let m = u32::from(mask_at(x, y, w, h, &levels));
        for c in px.iter_mut() {
            let v = u32::from(*c) * m / 255;
            *c = (v * 255 / RENORM).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/vignette.rs"]
mod tests;
