//! Layer-based raster toolkit shared by the scene, goal and title renderers.
//!
//! Vector content is rasterized by `vello_cpu` into premultiplied RGBA8 [`Layer`]s, optionally
//! blurred into a glow, and composited source-over onto the opaque RGB canvas.

pub(crate) mod bitmap_font;
pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod layer;
pub(crate) mod text;
