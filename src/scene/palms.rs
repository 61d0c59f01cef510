use std::f64::consts::PI;

use image::RgbImage;
use rand::Rng;

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::GoalwaveResult;
use crate::raster::layer::{Layer, paint_color, polyline, shape_path, stroke_width};

const FRONDS: u32 = 7;
const FROND_SEGMENTS: u32 = 15;
const FROND_JITTER: i64 = 20;
const TRUNK_CURVE: f64 = 20.0;

/// Fractional placement of one palm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PalmPreset {
    pub(crate) fx: f64,
    pub(crate) height_frac: f64,
    pub(crate) mirrored: bool,
}

pub(crate) const PALM_PRESETS: [PalmPreset; 4] = [
    PalmPreset {
        fx: 0.08,
        height_frac: 0.50,
        mirrored: false,
    },
    PalmPreset {
        fx: 0.92,
        height_frac: 0.45,
        mirrored: true,
    },
    PalmPreset {
        fx: 0.15,
        height_frac: 0.35,
        mirrored: false,
    },
    PalmPreset {
        fx: 0.85,
        height_frac: 0.38,
        mirrored: true,
    },
];

/// Trunk spine from the base upward, one point per row.
pub(crate) fn trunk_points(x: i64, base_y: i64, tree_height: i64, mirrored: bool) -> Vec<Point> {
    let trunk_height = tree_height * 2 / 3;
    let curve = if mirrored { -TRUNK_CURVE } else { TRUNK_CURVE };
    (0..trunk_height)
        .map(|i| {
            let progress = i as f64 / trunk_height as f64;
            let offset = ((progress * PI * 0.5).sin() * curve) as i64;
            Point::new((x + offset) as f64, (base_y - i) as f64)
        })
        .collect()
}

/// Base angle of frond `i`, measured counter-clockwise from +x.
pub(crate) fn frond_angle(i: u32, mirrored: bool) -> f64 {
    let angle = PI * 0.3 + (PI * 0.4 / f64::from(FRONDS)) * f64::from(i);
    if mirrored { PI - angle } else { angle }
}

/// Points along a drooping frond, starting at `start`.
pub(crate) fn frond_points(start: Point, angle: f64, length: f64) -> Vec<Point> {
    let mut pts = Vec::with_capacity(FROND_SEGMENTS as usize + 1);
    pts.push(start);
    for j in 1..=FROND_SEGMENTS {
        let t = f64::from(j) / f64::from(FROND_SEGMENTS);
        let droop = t * t * length * 0.4;
        pts.push(Point::new(
            start.x + angle.cos() * length * t,
            start.y - angle.sin() * length * t + droop,
        ));
    }
    pts
}

fn frond_segment_width(t: f64) -> f64 {
    ((3.0 * (1.0 - t)) as i64).max(1) as f64
}

fn paint_palm(
    ctx: &mut vello_cpu::RenderContext,
    x: i64,
    base_y: i64,
    tree_height: i64,
    mirrored: bool,
    rng: &mut impl Rng,
) {
    let trunk = trunk_points(x, base_y, tree_height, mirrored);
    let Some(&crown) = trunk.last() else {
        return;
    };

    let trunk_width = (tree_height / 15) as f64;
    let n = trunk.len() as f64;
    for (i, p) in trunk[..trunk.len() - 1].iter().enumerate() {
        let w = trunk_width * (1.0 - i as f64 / n * 0.5);
        let ellipse = kurbo::Ellipse::new(*p, (w / 2.0, 2.0), 0.0);
        ctx.fill_path(&shape_path(&ellipse));
    }

    for i in 0..FRONDS {
        let jitter = rng.random_range(-FROND_JITTER..=FROND_JITTER);
        let length = (tree_height / 2 + jitter) as f64;
        let pts = frond_points(crown, frond_angle(i, mirrored), length);
        for (j, seg) in pts.windows(2).enumerate() {
            let t = (j + 1) as f64 / f64::from(FROND_SEGMENTS);
            stroke_width(ctx, frond_segment_width(t));
            ctx.stroke_path(&polyline(seg));
        }
    }
}

/// Draw up to `count` palm silhouettes rooted at 65% of the canvas height.
pub(crate) fn draw_palms(
    canvas: &mut RgbImage,
    count: usize,
    color: Rgb8,
    rng: &mut impl Rng,
) -> GoalwaveResult<()> {
    let (w, h) = canvas.dimensions();
    let base_y = (f64::from(h) * 0.65) as i64;
    let layer = Layer::paint(w, h, |ctx| {
        ctx.set_paint(paint_color(color, 255));
        for preset in PALM_PRESETS.iter().take(count) {
            let x = (f64::from(w) * preset.fx) as i64;
            let tree_height = (f64::from(h) * preset.height_frac) as i64;
            paint_palm(ctx, x, base_y, tree_height, preset.mirrored, rng);
        }
        Ok(())
    })?;
    layer.composite_onto(canvas, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palms.rs"]
mod tests;
