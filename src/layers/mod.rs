//! Shape layers: the shared pedestal and the per-icon floating content.
//!
//! Every function here is a pure mapping from a frame (plus the derived scalars the composer hands
//! in) to a fully resolved [`Layer`]. Nothing is cached between frames.

pub mod blocks;
pub mod chart;
pub mod network;
pub mod neural;
pub mod pedestal;
pub mod terminal;

use crate::animation::wave::osc;
use crate::foundation::core::FrameIndex;
use crate::scene::color::Color;
use crate::scene::layer::{Layer, Placement, Viewport};
use crate::scene::model::Shape;
use crate::scene::resource::{ResourceId, ResourceScope};

pub use pedestal::{PedestalPose, PedestalStyle, render_pedestal};
pub use terminal::TerminalStyle;

/// What a layer function needs besides its animated inputs.
#[derive(Clone, Copy, Debug)]
pub struct LayerCtx<'a> {
    /// Namespace for the layer's resource ids.
    pub scope: &'a ResourceScope,
    /// Frame being rendered.
    pub frame: FrameIndex,
}

impl<'a> LayerCtx<'a> {
    /// Context for `frame` within `scope`.
    pub fn new(scope: &'a ResourceScope, frame: FrameIndex) -> Self {
        Self { scope, frame }
    }

    /// Scoped resource id.
    pub fn id(&self, local: &str) -> ResourceId {
        self.scope.id(local)
    }

    /// Frame as `f64`.
    pub fn f(&self) -> f64 {
        self.frame.as_f64()
    }
}

/// Floating content drawn above the pedestal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// Desktop monitor running a terminal.
    Terminal(TerminalStyle),
    /// Animated bar chart card.
    Chart,
    /// Neural-network chip.
    Neural,
    /// Two-ring ecosystem node graph.
    Network,
    /// Isometric platform blocks.
    Blocks,
}

/// Animated placement of the content layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ContentPose {
    /// Tilt about the vertical axis, in degrees.
    pub rotation_deg: f64,
    /// Vertical offset in pixels.
    pub y_offset: f64,
}

/// Render the content layer of `content` at `pose`.
pub fn render_content(content: Content, pose: ContentPose, ctx: &LayerCtx<'_>) -> Layer {
    match content {
        Content::Terminal(style) => terminal::render(style, pose, ctx),
        Content::Chart => chart::render(pose, ctx),
        Content::Neural => neural::render(pose, ctx),
        Content::Network => network::render(pose, ctx),
        Content::Blocks => blocks::render(pose, ctx),
    }
}

/// Empty content layer with the given view box, display size and lift.
pub(crate) fn content_layer(viewport: Viewport, lift: f64, pose: ContentPose) -> Layer {
    Layer::new(
        "content",
        viewport,
        Placement {
            lift,
            y_offset: pose.y_offset,
            rotate_y_deg: pose.rotation_deg,
        },
    )
}

/// Small decorative light whose opacity breathes as `base + 0.3 · sin(rate · frame + phase)`.
pub(crate) fn light(
    center: (f64, f64),
    r: f64,
    color: u32,
    base: f64,
    (rate, phase): (f64, f64),
    frame: FrameIndex,
) -> Shape {
    Shape::circle(center, r)
        .fill(Color::hex(color))
        .opacity(base + 0.3 * osc(frame, rate, phase))
}

#[cfg(test)]
#[path = "../../tests/unit/layers/mod.rs"]
mod tests;
