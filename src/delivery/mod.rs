//! Getting a wallpaper onto the desktop: remote fetch and per-platform setters.

#[cfg(feature = "fetch")]
pub(crate) mod fetch;
pub(crate) mod wallpaper;
