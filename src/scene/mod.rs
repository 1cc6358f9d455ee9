//! Frame-independent scene model: primitives, resources, layers and their SVG form.

pub mod color;
pub mod defs;
pub mod layer;
pub mod model;
pub mod resource;
pub mod svg;
