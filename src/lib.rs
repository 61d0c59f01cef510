//! Goalwave renders goal-tracker wallpapers: a list of `current / target` goals drawn as
//! progress bars over a generated vaporwave scene, then applied as the desktop background.
//!
//! The pipeline is linear and single-threaded:
//!
//! - Parse a [`GoalsConfig`] (JSON, lenient about goal numbers)
//! - [`Composer::render`] paints the background, title and goals, then runs the post effects
//! - [`encode_png`] / [`Wallpaper::save_png`] write the result
//! - [`set_wallpaper`] hands the file to the platform's wallpaper tool
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod compose;
pub(crate) mod config;
pub(crate) mod delivery;
pub(crate) mod effects;
pub(crate) mod goals;
pub(crate) mod raster;
pub(crate) mod scene;
/// Themes and the fixed color palette.
pub mod theme;

pub use crate::foundation::core::{Point, Rect, Resolution, Rgb8};
pub use crate::foundation::error::{GoalwaveError, GoalwaveResult};

pub use crate::compose::{
    Composer, PlacedGoal, SlotLayout, TextSource, Wallpaper, encode_png, generate, save_png,
};
pub use crate::config::model::{Goal, GoalsConfig};
#[cfg(feature = "fetch")]
pub use crate::delivery::fetch::{DEFAULT_FETCH_TIMEOUT, fetch_png};
pub use crate::delivery::wallpaper::{
    COMMAND_TIMEOUT, Platform, WallpaperCommand, candidate_commands, set_wallpaper,
};
pub use crate::effects::pipeline::{EffectFlags, apply as apply_effects};
pub use crate::goals::format::{format_number, percent_label, stat_line};
pub use crate::goals::{GoalGeometry, GoalRenderer, layout_scale};
pub use crate::raster::text::{FONT_ENV, FontWeight};
pub use crate::scene::{BackgroundParams, Sun, render_background};
