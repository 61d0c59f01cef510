use image::RgbImage;

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::GoalwaveResult;
use crate::raster::layer::{Layer, add_glow, paint_color, polyline, stroke_width};

const RADIAL_LINES: u32 = 20;
const HORIZONTAL_LINES: u32 = 15;
const SPREAD: f64 = 1.5;
const LINE_WIDTH: f64 = 2.0;
const GLOW_RADIUS: u32 = 3;

/// One straight grid segment with its alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GridLine {
    pub(crate) from: Point,
    pub(crate) to: Point,
    pub(crate) alpha: u8,
}

/// Lines of a perspective grid converging on `(width / 2, horizon)`.
pub(crate) fn grid_lines(width: u32, height: u32, horizon: i64) -> Vec<GridLine> {
    let w = f64::from(width);
    let h = f64::from(height);
    let vp_x = f64::from(width / 2);
    let vp_y = horizon as f64;
    let spread = w * SPREAD;
    let mut out = Vec::with_capacity((RADIAL_LINES + 1 + HORIZONTAL_LINES) as usize);

    let half = f64::from(RADIAL_LINES) / 2.0;
    for i in 0..=RADIAL_LINES {
        let x_bottom = (-spread / 2.0 + spread / f64::from(RADIAL_LINES) * f64::from(i) + w / 2.0)
            as i64 as f64;
        let dist = (f64::from(i) - half).abs() / half;
        out.push(GridLine {
            from: Point::new(vp_x, vp_y),
            to: Point::new(x_bottom, h),
            alpha: (255.0 * (1.0 - dist * 0.5)) as u8,
        });
    }

    let depth = h - vp_y;
    if depth <= 0.0 {
        return out;
    }
    for i in 1..=HORIZONTAL_LINES {
        let progress = (f64::from(i) / f64::from(HORIZONTAL_LINES)).powf(1.8);
        let y = (vp_y + depth * progress) as i64 as f64;
        if y <= vp_y {
            continue;
        }
        let t = (y - vp_y) / depth;
        let x_left = (vp_x - spread / 2.0 * t) as i64 as f64;
        let x_right = (vp_x + spread / 2.0 * t) as i64 as f64;
        out.push(GridLine {
            from: Point::new(x_left, y),
            to: Point::new(x_right, y),
            alpha: (100.0 + 155.0 * progress) as u8,
        });
    }
    out
}

/// Default horizon row: 55% down the canvas.
pub(crate) fn default_horizon(height: u32) -> i64 {
    (f64::from(height) * 0.55) as i64
}

/// Stroke the grid in `color` with a blurred glow beneath.
pub(crate) fn draw_grid(canvas: &mut RgbImage, horizon: i64, color: Rgb8) -> GoalwaveResult<()> {
    let (w, h) = canvas.dimensions();
    let lines = grid_lines(w, h, horizon);
    let layer = Layer::paint(w, h, |ctx| {
        stroke_width(ctx, LINE_WIDTH);
        for line in &lines {
            ctx.set_paint(paint_color(color, line.alpha));
            ctx.stroke_path(&polyline(&[line.from, line.to]));
        }
        Ok(())
    })?;
    add_glow(canvas, &layer, GLOW_RADIUS)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/grid.rs"]
mod tests;
