use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::GoalwaveResult;
use crate::raster::layer::Layer;
use crate::raster::text::{FontWeight, TextBlock, TextPainter};

/// Text queued for one layer pass, positioned by its top-left corner.
pub(crate) struct PlacedText {
    pub(crate) block: TextBlock,
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl PlacedText {
    pub(crate) fn new(
        painter: &mut TextPainter,
        text: &str,
        size_px: f32,
        weight: FontWeight,
        color: Rgb8,
        x: f64,
        y: f64,
    ) -> GoalwaveResult<Self> {
        Ok(Self {
            block: painter.layout(text, size_px, weight, color)?,
            x,
            y,
        })
    }
}

/// Rasterize `texts` into one layer.
pub(crate) fn text_layer(width: u32, height: u32, texts: &[PlacedText]) -> GoalwaveResult<Layer> {
    Layer::paint(width, height, |ctx| {
        for t in texts {
            t.block.draw(ctx, t.x, t.y);
        }
        Ok(())
    })
}

/// Composite plain text onto the canvas.
pub(crate) fn draw_texts(canvas: &mut RgbImage, texts: &[PlacedText]) -> GoalwaveResult<()> {
    if texts.is_empty() {
        return Ok(());
    }
    text_layer(canvas.width(), canvas.height(), texts)?.composite_onto(canvas, 1.0)
}

/// Blur `halo` into a glow, then composite the sharp `core` text over it.
pub(crate) fn draw_neon(
    canvas: &mut RgbImage,
    halo: &[PlacedText],
    core: &[PlacedText],
    radius: u32,
) -> GoalwaveResult<()> {
    let (w, h) = canvas.dimensions();
    if !halo.is_empty() {
        let glow = text_layer(w, h, halo)?.blurred(radius)?;
        glow.composite_onto(canvas, 1.0)?;
        glow.composite_onto(canvas, 0.6)?;
    }
    draw_texts(canvas, core)
}
