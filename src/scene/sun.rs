use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::GoalwaveResult;
use crate::raster::composite::premul;
use crate::raster::layer::Layer;
use crate::theme::palette::SUN_GLOW;

const STRIPES: i64 = 8;
const GLOW_RINGS: i64 = 30;
const GLOW_STEP: i64 = 3;
const GLOW_MAX_ALPHA: i64 = 8;

/// Placement of the striped sun, in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sun {
    /// Horizontal center.
    pub center_x: i64,
    /// Vertical center.
    pub center_y: i64,
    /// Disk radius.
    pub radius: i64,
}

impl Sun {
    /// Default placement: centered, 45% down, radius 18% of the short side.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self {
            center_x: i64::from(width / 2),
            center_y: (f64::from(height) * 0.45) as i64,
            radius: (f64::from(width.min(height)) * 0.18) as i64,
        }
    }

    /// Row ranges `[start, end)` cut out of the disk.
    pub(crate) fn stripe_rows(&self) -> Vec<(i64, i64)> {
        let gap = self.radius / STRIPES;
        let stripe = gap / 2;
        let bottom = self.center_y + self.radius;
        let mut rows = Vec::new();
        for i in 1..STRIPES {
            let offset = (self.radius as f64 * 0.2) as i64 + i * gap;
            let top = self.center_y + offset - stripe;
            if top > bottom {
                break;
            }
            let end = (self.center_y + offset).min(bottom);
            if top < end {
                rows.push((top, end));
            }
        }
        rows
    }

    fn distance(&self, x: u32, y: u32) -> f64 {
        let dx = (i64::from(x) - self.center_x) as f64;
        let dy = (i64::from(y) - self.center_y) as f64;
        dx.hypot(dy)
    }

    fn disk_pixel(&self, x: u32, y: u32, stripes: &[(i64, i64)]) -> [u8; 4] {
        let d = self.distance(x, y);
        if d > self.radius as f64 {
            return [0, 0, 0, 0];
        }
        let row = i64::from(y);
        if stripes.iter().any(|&(a, b)| row >= a && row < b) {
            return [0, 0, 0, 0];
        }
        let ring = (d.ceil() as i64).max(1);
        let c = ring_color(ring, self.radius);
        [c[0], c[1], c[2], 255]
    }

    fn glow_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let d = self.distance(x, y);
        let reach = (self.radius + GLOW_RINGS * GLOW_STEP) as f64;
        if d > reach {
            return [0, 0, 0, 0];
        }
        let over = d - self.radius as f64;
        let ring = ((over / GLOW_STEP as f64).ceil() as i64).clamp(1, GLOW_RINGS);
        premul(SUN_GLOW, glow_alpha(ring))
    }
}

/// Disk color of ring `ring` for a sun of `radius`.
pub(crate) fn ring_color(ring: i64, radius: i64) -> Rgb8 {
    let p = ring as f64 / radius.max(1) as f64;
    [
        255,
        (220.0 * p + 100.0 * (1.0 - p)) as u8,
        (50.0 + 150.0 * (1.0 - p)) as u8,
    ]
}

pub(crate) fn glow_alpha(ring: i64) -> u8 {
    (GLOW_MAX_ALPHA * (GLOW_RINGS - ring) / GLOW_RINGS) as u8
}

/// Composite the glow halo, then the striped disk.
pub(crate) fn draw_sun(canvas: &mut RgbImage, sun: Sun) -> GoalwaveResult<()> {
    let (w, h) = canvas.dimensions();
    if sun.radius <= 0 || w == 0 || h == 0 {
        return Ok(());
    }

    let halo = Layer::from_fn(w, h, |x, y| sun.glow_pixel(x, y));
    halo.composite_onto(canvas, 1.0)?;

    let stripes = sun.stripe_rows();
    let disk = Layer::from_fn(w, h, |x, y| sun.disk_pixel(x, y, &stripes));
    disk.composite_onto(canvas, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sun.rs"]
mod tests;
