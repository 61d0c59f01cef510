use crate::foundation::error::{GoalwaveError, GoalwaveResult};

pub use kurbo::{Point, Rect};

/// Straight (non-premultiplied) RGB8 color.
pub type Rgb8 = [u8; 3];

/// Output wallpaper dimensions in pixels.
///
/// Serialized as a `[width, height]` pair, matching the goals file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Largest accepted width or height.
    ///
    /// The vector rasterizer addresses pixels with 16-bit coordinates; the cap also bounds the
    /// memory of a single generation.
    pub const MAX_DIMENSION: u32 = 16_384;

    /// Create a validated resolution.
    pub fn new(width: u32, height: u32) -> GoalwaveResult<Self> {
        let r = Self { width, height };
        r.validate()?;
        Ok(r)
    }

    /// Check that both sides are in `1..=MAX_DIMENSION`.
    pub fn validate(self) -> GoalwaveResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GoalwaveError::validation(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > Self::MAX_DIMENSION || self.height > Self::MAX_DIMENSION {
            return Err(GoalwaveError::validation(format!(
                "resolution {}x{} exceeds the {} px limit",
                self.width,
                self.height,
                Self::MAX_DIMENSION
            )));
        }
        Ok(())
    }

    /// Shorter side in pixels.
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<Resolution> for (u32, u32) {
    fn from(r: Resolution) -> Self {
        (r.width, r.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
