//! iconreel renders deterministic, frame-driven animated vector icons.
//!
//! Every frame is a pure function of its index and the composition's [`VideoConfig`]:
//!
//! - Look up a [`CompositionEntry`] in a [`Registry`]
//! - Build the [`Scene`] of a frame and serialize it to SVG, or
//! - Rasterize frames with a [`CpuBackend`] and stream a range into a [`FrameSink`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

/// Per-frame animation drivers.
pub mod animation;
/// Frame sinks.
pub mod encode;
/// Shape layers (pedestal and icon content).
pub mod layers;
/// Composition registry.
pub mod registry;
/// Rasterization and range rendering.
pub mod render;
/// Resolved scene model and SVG writer.
pub mod scene;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2, VideoConfig,
};
pub use crate::foundation::error::{IconError, IconResult};
pub use crate::foundation::math::{Extrapolate, interpolate, interpolate_with, lerp_point, unit, wrap};

pub use crate::animation::compose::{DerivedScalars, compose};
pub use crate::animation::wave::Wave;
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::registry::icon::Icon;
pub use crate::registry::{CompositionEntry, Registry};
pub use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, render_frame, render_frames, render_range,
};
pub use crate::scene::layer::Scene;
pub use crate::scene::resource::ResourceScope;
