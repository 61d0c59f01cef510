use image::RgbImage;
use kurbo::Shape;

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{GoalwaveError, GoalwaveResult};
use crate::raster::blur::{blur_rgba8_premul, sigma_for_radius};
use crate::raster::composite::{PremulRgba8, over_canvas_in_place};

/// Full-canvas premultiplied RGBA8 layer.
#[derive(Clone, Debug)]
pub(crate) struct Layer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Layer {
    /// Fully transparent layer.
    pub(crate) fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    /// Rasterize vector content drawn by `draw` into a new transparent layer.
    pub(crate) fn paint(
        width: u32,
        height: u32,
        draw: impl FnOnce(&mut vello_cpu::RenderContext) -> GoalwaveResult<()>,
    ) -> GoalwaveResult<Self> {
        let (w, h) = dims_u16(width, height)?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        draw(&mut ctx)?;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        Ok(Self {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }

    /// Build a layer pixel by pixel; `shade` returns premultiplied RGBA8.
    pub(crate) fn from_fn(
        width: u32,
        height: u32,
        mut shade: impl FnMut(u32, u32) -> PremulRgba8,
    ) -> Self {
        let mut layer = Self::transparent(width, height);
        if width == 0 {
            return layer;
        }
        for (i, px) in layer.data.chunks_exact_mut(4).enumerate() {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            px.copy_from_slice(&shade(x, y));
        }
        layer
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    #[cfg(test)]
    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Premultiplied pixel at `(x, y)`, transparent outside the layer.
    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> PremulRgba8 {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Gaussian-blurred copy of this layer.
    pub(crate) fn blurred(&self, radius: u32) -> GoalwaveResult<Self> {
        let data = blur_rgba8_premul(
            &self.data,
            self.width,
            self.height,
            radius,
            sigma_for_radius(radius),
        )?;
        Ok(Self {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Source-over composite onto `canvas`.
    pub(crate) fn composite_onto(&self, canvas: &mut RgbImage, opacity: f32) -> GoalwaveResult<()> {
        if canvas.width() != self.width || canvas.height() != self.height {
            return Err(GoalwaveError::render(format!(
                "layer {}x{} does not match canvas {}x{}",
                self.width,
                self.height,
                canvas.width(),
                canvas.height()
            )));
        }
        over_canvas_in_place(canvas, &self.data, opacity)
    }
}

/// Composite a blurred duplicate of `layer` beneath the sharp layer.
pub(crate) fn add_glow(canvas: &mut RgbImage, layer: &Layer, radius: u32) -> GoalwaveResult<()> {
    layer.blurred(radius)?.composite_onto(canvas, 1.0)?;
    layer.composite_onto(canvas, 1.0)
}

fn dims_u16(width: u32, height: u32) -> GoalwaveResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| GoalwaveError::render("layer width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| GoalwaveError::render("layer height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(GoalwaveError::render("layer dimensions must be non-zero"));
    }
    Ok((w, h))
}

pub(crate) fn paint_color(c: Rgb8, alpha: u8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c[0], c[1], c[2], alpha)
}

pub(crate) fn shape_path(shape: &impl Shape) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

pub(crate) fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

pub(crate) fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

/// Open polyline through `points`.
pub(crate) fn polyline(points: &[Point]) -> vello_cpu::kurbo::BezPath {
    let mut p = vello_cpu::kurbo::BezPath::new();
    let mut it = points.iter();
    if let Some(first) = it.next() {
        p.move_to(point_to_cpu(*first));
        for pt in it {
            p.line_to(point_to_cpu(*pt));
        }
    }
    p
}

/// Closed polygon through `points`.
pub(crate) fn polygon(points: &[Point]) -> vello_cpu::kurbo::BezPath {
    let mut p = polyline(points);
    if points.len() > 2 {
        p.close_path();
    }
    p
}

pub(crate) fn stroke_width(ctx: &mut vello_cpu::RenderContext, width: f64) {
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
}

#[cfg(test)]
#[path = "../../tests/unit/raster/layer.rs"]
mod tests;
