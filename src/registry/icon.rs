use crate::animation::compose::{DerivedScalars, compose};
use crate::foundation::core::{FrameIndex, VideoConfig};
use crate::layers::{
    Content, ContentPose, LayerCtx, PedestalPose, PedestalStyle, TerminalStyle, render_content,
    render_pedestal,
};
use crate::scene::layer::Scene;
use crate::scene::resource::ResourceScope;

/// The animated icons this crate can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Monitor with a terminal ("online").
    Online,
    /// Bar chart ("data").
    Data,
    /// Neural chip ("AI").
    Ai,
    /// Isometric blocks ("platform").
    Platform,
    /// Node graph ("ecosystem").
    Ecosystem,
    /// Bobbing pedestal with a detailed monitor.
    Animated,
}

/// How the derived scalars are distributed over the two layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Pedestal spins in place; content tilts.
    Spin,
    /// Pedestal bobs without spinning; content tilts and follows the bob.
    Bob,
}

impl Icon {
    /// Every icon, in registry order.
    pub const ALL: [Icon; 6] = [
        Icon::Online,
        Icon::Data,
        Icon::Ai,
        Icon::Platform,
        Icon::Ecosystem,
        Icon::Animated,
    ];

    /// Registry file name of the icon (`snake_case`).
    pub fn name(self) -> &'static str {
        match self {
            Icon::Online => "online",
            Icon::Data => "data",
            Icon::Ai => "ai",
            Icon::Platform => "platform",
            Icon::Ecosystem => "ecosystem",
            Icon::Animated => "animated",
        }
    }

    /// Pedestal variant.
    pub fn pedestal(self) -> PedestalStyle {
        match self {
            Icon::Animated => PedestalStyle::Twinkle,
            _ => PedestalStyle::Spinning,
        }
    }

    /// Content variant.
    pub fn content(self) -> Content {
        match self {
            Icon::Online => Content::Terminal(TerminalStyle::Standard),
            Icon::Data => Content::Chart,
            Icon::Ai => Content::Neural,
            Icon::Platform => Content::Blocks,
            Icon::Ecosystem => Content::Network,
            Icon::Animated => Content::Terminal(TerminalStyle::Detailed),
        }
    }

    /// Motion mode.
    pub fn motion(self) -> Motion {
        match self {
            Icon::Animated => Motion::Bob,
            _ => Motion::Spin,
        }
    }

    /// Poses of the pedestal and the content for one set of derived scalars.
    pub fn poses(self, d: &DerivedScalars) -> (PedestalPose, ContentPose) {
        match self.motion() {
            Motion::Spin => (
                PedestalPose {
                    rotation_deg: d.base_rotation,
                    y_offset: 0.0,
                    glow: d.glow_intensity,
                },
                ContentPose {
                    rotation_deg: d.card_rotation,
                    y_offset: 0.0,
                },
            ),
            Motion::Bob => (
                PedestalPose {
                    rotation_deg: 0.0,
                    y_offset: d.ring_y_offset,
                    glow: d.glow_intensity,
                },
                ContentPose {
                    rotation_deg: d.card_rotation,
                    y_offset: d.card_y_offset,
                },
            ),
        }
    }

    /// Build the complete scene of `frame`: pedestal first, content on top.
    pub fn render(self, frame: FrameIndex, config: &VideoConfig, scope: ResourceScope) -> Scene {
        let d = compose(frame, config);
        let (pedestal, content) = self.poses(&d);
        let ctx = LayerCtx::new(&scope, frame);
        let layers = vec![
            render_pedestal(self.pedestal(), pedestal, &ctx),
            render_content(self.content(), content, &ctx),
        ];
        Scene {
            canvas: config.canvas,
            frame,
            scope,
            background: None,
            layers,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/icon.rs"]
mod tests;
