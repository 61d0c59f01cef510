use std::path::{Path, PathBuf};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{GoalwaveError, GoalwaveResult};
use crate::raster::bitmap_font;

/// Environment variable naming a font file tried before the built-in path table.
pub const FONT_ENV: &str = "GOALWAVE_FONT";

const REGULAR_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BOLD_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Font weight requested by a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    /// Regular body text.
    Regular,
    /// Titles, labels and percentages.
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Ordered font candidates for `weight`: the env override, then the built-in table.
///
/// Bold falls back to the regular faces.
pub(crate) fn font_candidates(weight: FontWeight) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(p) = std::env::var_os(FONT_ENV).filter(|v| !v.is_empty()) {
        out.push(PathBuf::from(p));
    }
    let table: &[&[&str]] = match weight {
        FontWeight::Regular => &[REGULAR_FONT_PATHS],
        FontWeight::Bold => &[BOLD_FONT_PATHS, REGULAR_FONT_PATHS],
    };
    out.extend(table.iter().flat_map(|t| t.iter()).map(PathBuf::from));
    out
}

struct LoadedFont {
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// Shaped text ready to draw, or a bitmap-font fallback.
pub(crate) enum TextBlock {
    Shaped {
        layout: parley::Layout<TextBrushRgba8>,
        font: vello_cpu::peniko::FontData,
    },
    Bitmap {
        text: String,
        size_px: f32,
        color: Rgb8,
    },
}

impl TextBlock {
    pub(crate) fn width(&self) -> f64 {
        match self {
            Self::Shaped { layout, .. } => f64::from(layout.width()),
            Self::Bitmap { text, size_px, .. } => bitmap_font::measure(text, *size_px).0,
        }
    }

    pub(crate) fn height(&self) -> f64 {
        match self {
            Self::Shaped { layout, .. } => f64::from(layout.height()),
            Self::Bitmap { text, size_px, .. } => bitmap_font::measure(text, *size_px).1,
        }
    }

    /// Draw with the top-left corner of the text box at `(x, y)`.
    pub(crate) fn draw(&self, ctx: &mut vello_cpu::RenderContext, x: f64, y: f64) {
        match self {
            Self::Shaped { layout, font } => {
                ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));
                        let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            }
            Self::Bitmap {
                text,
                size_px,
                color,
            } => bitmap_font::draw(ctx, text, *size_px, *color, x, y),
        }
    }
}

/// Lays out text with a resolved font file, or the bitmap font when none loaded.
///
/// Each painter owns its own Parley contexts; create one per generation.
pub(crate) struct TextPainter {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    regular: Option<LoadedFont>,
    bold: Option<LoadedFont>,
}

impl TextPainter {
    /// Resolve fonts from [`font_candidates`].
    pub(crate) fn new() -> Self {
        Self::with_candidates(
            &font_candidates(FontWeight::Regular),
            &font_candidates(FontWeight::Bold),
        )
    }

    /// Resolve fonts from explicit candidate lists; the first readable, parseable file wins.
    pub(crate) fn with_candidates(regular: &[PathBuf], bold: &[PathBuf]) -> Self {
        let mut painter = Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            regular: None,
            bold: None,
        };
        painter.regular = painter.load_first(regular);
        painter.bold = painter.load_first(bold);
        if painter.regular.is_none() && painter.bold.is_none() {
            tracing::warn!("no usable font file found, falling back to the built-in bitmap font");
        }
        painter
    }

    /// Painter that always uses the bitmap font.
    pub(crate) fn bitmap_only() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            regular: None,
            bold: None,
        }
    }

    /// Whether any font file was loaded.
    pub(crate) fn has_font_file(&self) -> bool {
        self.regular.is_some() || self.bold.is_some()
    }

    fn load_first(&mut self, candidates: &[PathBuf]) -> Option<LoadedFont> {
        for path in candidates {
            match self.load_font(path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), family = %font.family, "loaded font");
                    return Some(font);
                }
                Err(e) => {
                    tracing::trace!(path = %path.display(), error = %e, "font candidate skipped")
                }
            }
        }
        None
    }

    fn load_font(&mut self, path: &Path) -> GoalwaveResult<LoadedFont> {
        let bytes = std::fs::read(path).map_err(|e| {
            GoalwaveError::io(format!("failed to read font '{}': {e}", path.display()))
        })?;

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            GoalwaveError::validation(format!("no font families in '{}'", path.display()))
        })?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GoalwaveError::validation("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(LoadedFont { family, data })
    }

    /// Shape a single line of text.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        weight: FontWeight,
        color: Rgb8,
    ) -> GoalwaveResult<TextBlock> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(GoalwaveError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let font = match weight {
            FontWeight::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontWeight::Regular => self.regular.as_ref().or(self.bold.as_ref()),
        };
        let Some(font) = font else {
            return Ok(TextBlock::Bitmap {
                text: text.to_string(),
                size_px,
                color,
            });
        };
        let family = font.family.clone();
        let data = font.data.clone();

        let brush = TextBrushRgba8 {
            r: color[0],
            g: color[1],
            b: color[2],
            a: 255,
        };
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(TextBlock::Shaped { layout, font: data })
    }

    /// Horizontal extent of `text` at `size_px`.
    pub(crate) fn measure(
        &mut self,
        text: &str,
        size_px: f32,
        weight: FontWeight,
    ) -> GoalwaveResult<(f64, f64)> {
        let block = self.layout(text, size_px, weight, [255, 255, 255])?;
        Ok((block.width(), block.height()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/text.rs"]
mod tests;
