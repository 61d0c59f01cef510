use image::RgbImage;
use rand::Rng;

use super::{aberration, color, glitch, grain, vignette};

/// Which post effects run; absent fields in JSON keep their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectFlags {
    /// Saturation and contrast boost.
    pub color_boost: bool,
    /// Red/blue channel split.
    pub chromatic: bool,
    /// Randomly displaced horizontal bands.
    pub glitch: bool,
    /// Darkened rows every third line.
    pub scanlines: bool,
    /// Monochrome film grain.
    pub noise: bool,
    /// Darkened corners.
    pub vignette: bool,
}

impl Default for EffectFlags {
    fn default() -> Self {
        Self {
            color_boost: true,
            chromatic: true,
            glitch: false,
            scanlines: true,
            noise: true,
            vignette: true,
        }
    }
}

impl EffectFlags {
    /// Every effect off.
    pub fn none() -> Self {
        Self {
            color_boost: false,
            chromatic: false,
            glitch: false,
            scanlines: false,
            noise: false,
            vignette: false,
        }
    }

    /// Every effect on, glitch included.
    pub fn all() -> Self {
        Self {
            glitch: true,
            ..Self::default()
        }
    }

    /// Whether any effect would touch the canvas.
    pub fn any(&self) -> bool {
        *self != Self::none()
    }
}

/// Run the enabled effects in order: color boost, chromatic aberration, glitch, scanlines,
/// noise, vignette.
#[tracing::instrument(skip(canvas, rng))]
pub fn apply(canvas: &mut RgbImage, flags: &EffectFlags, rng: &mut impl Rng) {
    if flags.color_boost {
        color::color_boost(canvas);
    }
    if flags.chromatic {
        aberration::chromatic_aberration(canvas, aberration::OFFSET);
    }
    if flags.glitch {
        glitch::glitch_strips(canvas, rng);
    }
    if flags.scanlines {
        grain::scanlines(canvas, grain::SCANLINE_SPACING, grain::SCANLINE_ALPHA);
    }
    if flags.noise {
        grain::noise(canvas, grain::NOISE_RANGE, rng);
    }
    if flags.vignette {
        vignette::vignette(canvas, vignette::STRENGTH);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pipeline.rs"]
mod tests;
