use std::f64::consts::PI;

use image::RgbImage;

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::GoalwaveResult;
use crate::raster::layer::{Layer, add_glow, paint_color, polygon, shape_path, stroke_width};
use crate::theme::palette::Palette;

const OUTLINE_ALPHA: u8 = 200;
const OUTLINE_WIDTH: f64 = 2.0;
const GLOW_RADIUS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ShapeKind {
    Triangle { rotation_deg: f64 },
    Circle,
}

/// A floating outline at a fractional canvas position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FloatingShape {
    pub(crate) kind: ShapeKind,
    pub(crate) fx: f64,
    pub(crate) fy: f64,
    pub(crate) size: f64,
    pub(crate) color: Rgb8,
}

pub(crate) const FLOATING_SHAPES: [FloatingShape; 5] = [
    FloatingShape {
        kind: ShapeKind::Triangle { rotation_deg: 0.0 },
        fx: 0.2,
        fy: 0.25,
        size: 40.0,
        color: Palette::PINK,
    },
    FloatingShape {
        kind: ShapeKind::Triangle { rotation_deg: 30.0 },
        fx: 0.8,
        fy: 0.3,
        size: 35.0,
        color: Palette::CYAN,
    },
    FloatingShape {
        kind: ShapeKind::Triangle { rotation_deg: 15.0 },
        fx: 0.75,
        fy: 0.15,
        size: 25.0,
        color: Palette::PURPLE,
    },
    FloatingShape {
        kind: ShapeKind::Circle,
        fx: 0.25,
        fy: 0.35,
        size: 20.0,
        color: Palette::NEON_BLUE,
    },
    FloatingShape {
        kind: ShapeKind::Circle,
        fx: 0.7,
        fy: 0.2,
        size: 15.0,
        color: Palette::HOT_PINK,
    },
];

impl FloatingShape {
    pub(crate) fn center(&self, width: u32, height: u32) -> Point {
        Point::new(
            (f64::from(width) * self.fx) as i64 as f64,
            (f64::from(height) * self.fy) as i64 as f64,
        )
    }
}

/// Vertices of an upward-pointing triangle rotated by `rotation_deg`.
pub(crate) fn triangle_vertices(center: Point, size: f64, rotation_deg: f64) -> [Point; 3] {
    let rot = rotation_deg.to_radians();
    std::array::from_fn(|i| {
        let angle = rot + i as f64 * 2.0 * PI / 3.0 - PI / 2.0;
        Point::new(
            center.x + size * angle.cos(),
            center.y + size * angle.sin(),
        )
    })
}

/// Outline the floating triangles and circles with a glow beneath.
pub(crate) fn draw_shapes(canvas: &mut RgbImage) -> GoalwaveResult<()> {
    let (w, h) = canvas.dimensions();
    let layer = Layer::paint(w, h, |ctx| {
        stroke_width(ctx, OUTLINE_WIDTH);
        for shape in &FLOATING_SHAPES {
            ctx.set_paint(paint_color(shape.color, OUTLINE_ALPHA));
            let center = shape.center(w, h);
            match shape.kind {
                ShapeKind::Triangle { rotation_deg } => {
                    let pts = triangle_vertices(center, shape.size, rotation_deg);
                    ctx.stroke_path(&polygon(&pts));
                }
                ShapeKind::Circle => {
                    ctx.stroke_path(&shape_path(&kurbo::Circle::new(center, shape.size)));
                }
            }
        }
        Ok(())
    })?;
    add_glow(canvas, &layer, GLOW_RADIUS)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shapes.rs"]
mod tests;
