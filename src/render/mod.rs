//! Rasterization of scenes into pixel frames.
//!
//! Scenes are serialized with [`crate::scene::svg::to_svg_document`], parsed by `usvg` and drawn
//! by `resvg`. [`pipeline`] drives single frames and whole ranges, optionally on a `rayon` pool.

/// Frame buffer type and backend trait.
pub mod backend;
/// CPU rasterizer powered by `resvg`.
pub mod cpu;
/// Frame and range render entry points.
pub mod pipeline;
