//! Post effects applied to the finished canvas, in a fixed order (see [`pipeline::apply`]).
//!
//! Every effect works in place on the RGB canvas and keeps its dimensions.

pub(crate) mod aberration;
pub(crate) mod color;
pub(crate) mod glitch;
pub(crate) mod grain;
pub(crate) mod pipeline;
pub(crate) mod vignette;
