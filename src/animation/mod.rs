//! Frame-to-scalar animation math.
//!
//! [`wave`] holds the primitive periodic drivers; [`compose`] derives the per-frame scalars that
//! pose the pedestal and content layers.

pub mod compose;
pub mod wave;
