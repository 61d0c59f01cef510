//! Procedural vaporwave background: sky, sun, floating shapes, palms and grid.
//!
//! Each stage draws over the canvas in place and keeps its dimensions. Content that falls
//! outside a small canvas is clipped, never an error.

pub(crate) mod grid;
pub(crate) mod palms;
pub(crate) mod shapes;
pub(crate) mod sky;
pub(crate) mod sun;

use image::RgbImage;
use rand::Rng;

use crate::foundation::error::GoalwaveResult;
use crate::theme::palette::{Palette, SILHOUETTE};

pub use sun::Sun;

/// Overrides for the background stages; `None` means the canvas-relative default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundParams {
    /// Sun placement.
    pub sun: Option<Sun>,
    /// Grid horizon row.
    pub horizon: Option<i64>,
    /// Number of palm silhouettes, at most 4.
    pub palms: usize,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            sun: None,
            horizon: None,
            palms: palms::PALM_PRESETS.len(),
        }
    }
}

/// Paint the full background: sky, sun, shapes, palms, then grid.
#[tracing::instrument(skip(canvas, rng), fields(width = canvas.width(), height = canvas.height()))]
pub fn render_background(
    canvas: &mut RgbImage,
    params: &BackgroundParams,
    rng: &mut impl Rng,
) -> GoalwaveResult<()> {
    let (w, h) = canvas.dimensions();
    sky::draw_sky(canvas);
    sun::draw_sun(canvas, params.sun.unwrap_or_else(|| Sun::for_canvas(w, h)))?;
    shapes::draw_shapes(canvas)?;
    palms::draw_palms(canvas, params.palms, SILHOUETTE, rng)?;
    grid::draw_grid(
        canvas,
        params.horizon.unwrap_or_else(|| grid::default_horizon(h)),
        Palette::CYAN,
    )?;
    tracing::debug!("background rendered");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mod.rs"]
mod tests;
