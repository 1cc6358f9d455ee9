//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order and are driven by
//! [`render_range`](crate::render::pipeline::render_range).

/// Generic frame sink trait and built-in sinks.
pub mod sink;
