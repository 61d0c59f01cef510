use crate::foundation::core::Rgb8;

/// Named colors of the vaporwave theme.
pub struct Palette;

impl Palette {
    /// Neon pink.
    pub const PINK: Rgb8 = [255, 113, 206];
    /// Grid cyan.
    pub const CYAN: Rgb8 = [1, 205, 254];
    /// Lavender purple.
    pub const PURPLE: Rgb8 = [185, 103, 255];
    /// Indigo.
    pub const DARK_PURPLE: Rgb8 = [75, 0, 130];
    /// Magenta.
    pub const HOT_PINK: Rgb8 = [255, 0, 128];
    /// Sunset orange.
    pub const ORANGE: Rgb8 = [255, 151, 28];
    /// Sun yellow.
    pub const YELLOW: Rgb8 = [255, 220, 0];
    /// Aqua.
    pub const NEON_BLUE: Rgb8 = [77, 238, 234];
    /// Near-black violet.
    pub const BLACK: Rgb8 = [15, 5, 25];
    /// Night sky.
    pub const DARK_BLUE: Rgb8 = [20, 0, 50];

    /// Look up a palette color by its symbolic name.
    pub fn named(name: &str) -> Option<Rgb8> {
        PALETTE_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }
}

/// Palette colors by snake_case name.
pub const PALETTE_TABLE: &[(&str, Rgb8)] = &[
    ("pink", Palette::PINK),
    ("cyan", Palette::CYAN),
    ("purple", Palette::PURPLE),
    ("dark_purple", Palette::DARK_PURPLE),
    ("hot_pink", Palette::HOT_PINK),
    ("orange", Palette::ORANGE),
    ("yellow", Palette::YELLOW),
    ("neon_blue", Palette::NEON_BLUE),
    ("black", Palette::BLACK),
    ("dark_blue", Palette::DARK_BLUE),
];

/// Sky gradient stops, top to bottom.
pub const SKY_STOPS: [Rgb8; 6] = [
    [20, 0, 50],
    [75, 0, 130],
    [185, 103, 255],
    [255, 113, 206],
    [255, 151, 128],
    [255, 200, 100],
];

/// Cyclic goal colors, indexed by `goal_index % len`.
pub const GOAL_COLORS: [Rgb8; 6] = [
    Palette::PINK,
    Palette::CYAN,
    Palette::PURPLE,
    Palette::NEON_BLUE,
    Palette::ORANGE,
    Palette::HOT_PINK,
];

/// Halo around the sun.
pub const SUN_GLOW: Rgb8 = [255, 180, 100];
/// Palm silhouettes.
pub const SILHOUETTE: Rgb8 = [10, 5, 20];
/// Unfilled part of a progress track.
pub const TRACK_FILL: Rgb8 = [20, 0, 50];
/// `current / target` lines.
pub const STAT_TEXT: Rgb8 = [235, 225, 255];
/// Core of neon text.
pub const TITLE_TEXT: Rgb8 = [255, 240, 250];

/// Colors of the minimal theme.
pub mod minimal {
    use crate::foundation::core::Rgb8;

    /// Page.
    pub const BACKGROUND: Rgb8 = [245, 245, 245];
    /// Title, names and stats.
    pub const TEXT: Rgb8 = [50, 50, 50];
    /// Fill, percentages and title underline.
    pub const PRIMARY: Rgb8 = [0, 120, 255];
    /// Empty track.
    pub const GREY: Rgb8 = [200, 200, 200];
}

/// Pick the display color for the goal at `index`.
pub fn goal_color(index: usize) -> Rgb8 {
    GOAL_COLORS[index % GOAL_COLORS.len()]
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
