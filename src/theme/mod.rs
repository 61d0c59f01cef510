/// Fixed color constants of both themes.
pub mod palette;

/// Visual style of a wallpaper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Sunset sky, striped sun, neon grid, palms and post effects.
    #[default]
    Vaporwave,
    /// Flat light background with plain text and bars, no post effects.
    Minimal,
}
