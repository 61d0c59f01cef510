//! Wallpaper composition: background, title, goals, then post effects.

pub(crate) mod layout;

use std::io::Cursor;
use std::path::Path;

use image::RgbImage;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::model::GoalsConfig;
use crate::effects::pipeline;
use crate::foundation::error::{GoalwaveError, GoalwaveResult};
use crate::goals::{GoalGeometry, GoalRenderer};
use crate::raster::text::TextPainter;
use crate::scene::{BackgroundParams, render_background};
use crate::theme::Theme;
use crate::theme::palette;

pub use layout::SlotLayout;

/// A goal that was drawn, with its index in the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGoal {
    /// Position in `GoalsConfig::goals`.
    pub index: usize,
    /// Where it landed.
    pub geometry: GoalGeometry,
}

/// Result of one generation.
#[derive(Clone, Debug)]
pub struct Wallpaper {
    /// Final RGB image, exactly the configured resolution.
    pub image: RgbImage,
    /// Goals that were drawn, in order.
    pub placed: Vec<PlacedGoal>,
    /// Indices of goals that did not fit.
    pub skipped: Vec<usize>,
}

impl Wallpaper {
    /// Encode the image as PNG.
    pub fn encode_png(&self) -> GoalwaveResult<Vec<u8>> {
        encode_png(&self.image)
    }

    /// Write the image to `path` as PNG, creating parent directories.
    pub fn save_png(&self, path: impl AsRef<Path>) -> GoalwaveResult<()> {
        save_png(&self.image, path)
    }
}

/// How text is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSource {
    /// Font files from `GOALWAVE_FONT` and the system table, bitmap font if none load.
    #[default]
    System,
    /// Always the built-in bitmap font.
    Bitmap,
}

/// Renders [`GoalsConfig`]s into wallpapers.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    background: BackgroundParams,
    text: TextSource,
}

impl Composer {
    /// Composer with default background placement and system fonts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override sun, horizon or palm count.
    pub fn with_background(mut self, background: BackgroundParams) -> Self {
        self.background = background;
        self
    }

    /// Choose where glyphs come from.
    pub fn with_text(mut self, text: TextSource) -> Self {
        self.text = text;
        self
    }

    /// Render `config`; fails without producing an image if any stage fails.
    #[tracing::instrument(
        skip(self, config),
        fields(
            width = config.resolution.width,
            height = config.resolution.height,
            goals = config.goals.len(),
            theme = ?config.theme,
        )
    )]
    pub fn render(&self, config: &GoalsConfig) -> GoalwaveResult<Wallpaper> {
        config.validate()?;
        let res = config.resolution;
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let painter = match self.text {
            TextSource::System => TextPainter::new(),
            TextSource::Bitmap => TextPainter::bitmap_only(),
        };
        tracing::debug!(font_file = painter.has_font_file(), "text painter ready");
        let mut goals = GoalRenderer::with_painter(config.theme, res.height, painter);
        let layout = SlotLayout::new(config.theme, res);

        let mut canvas = match config.theme {
            Theme::Vaporwave => {
                let mut c = RgbImage::new(res.width, res.height);
                render_background(&mut c, &self.background, &mut rng)?;
                c
            }
            Theme::Minimal => RgbImage::from_pixel(
                res.width,
                res.height,
                image::Rgb(palette::minimal::BACKGROUND),
            ),
        };

        goals.render_title(&mut canvas, &config.title, layout.title_y)?;

        let mut placed = Vec::with_capacity(config.goals.len());
        let mut skipped = Vec::new();
        for (index, goal) in config.goals.iter().enumerate() {
            let slot_y = layout.slot_y(index);
            if !layout.fits(slot_y) {
                skipped.push(index);
                continue;
            }
            let geometry = goals.render_goal(
                &mut canvas,
                goal,
                layout.slot_x,
                slot_y,
                layout.slot_width,
                index,
            )?;
            placed.push(PlacedGoal { index, geometry });
        }
        if !skipped.is_empty() {
            tracing::debug!(?skipped, "goals below the cutoff were not drawn");
        }

        if config.theme == Theme::Vaporwave {
            pipeline::apply(&mut canvas, &config.effects, &mut rng);
        }

        Ok(Wallpaper {
            image: canvas,
            placed,
            skipped,
        })
    }
}

/// Render `config` with the default [`Composer`] and return the image only.
pub fn generate(config: &GoalsConfig) -> GoalwaveResult<RgbImage> {
    Composer::new().render(config).map(|w| w.image)
}

/// Encode an RGB image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> GoalwaveResult<Vec<u8>> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| GoalwaveError::render(format!("png encode failed: {e}")))?;
    Ok(buf)
}

/// Write an RGB image to `path` as PNG, creating parent directories.
pub fn save_png(image: &RgbImage, path: impl AsRef<Path>) -> GoalwaveResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            GoalwaveError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)
        .map_err(|e| GoalwaveError::io(format!("write '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), "wallpaper written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/mod.rs"]
mod tests;
