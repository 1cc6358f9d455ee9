use crate::scene::color::Color;
use crate::scene::model::Node;
use crate::scene::resource::ResourceId;

/// One gradient stop. The stop opacity comes from the color's alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stop {
    /// Offset in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

/// Shorthand for a [`Stop`].
pub fn stop(offset: f64, color: Color) -> Stop {
    Stop { offset, color }
}

/// Filter pipelines available to layers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum FilterKind {
    /// Gaussian blur merged under the source graphic.
    Glow {
        /// Blur standard deviation.
        std_dev: f64,
    },
    /// Plain Gaussian blur of the source.
    Blur {
        /// Blur standard deviation.
        std_dev: f64,
    },
    /// Offset blurred shadow under the source.
    DropShadow {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
        /// Blur standard deviation.
        std_dev: f64,
        /// Flood color, alpha used as flood opacity.
        color: Color,
    },
}

/// Filter region as fractions of the element bounding box (`x`, `y`, `width`, `height`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FilterRegion(pub f64, pub f64, pub f64, pub f64);

impl FilterRegion {
    /// `-50% -50% 200% 200%`.
    pub const WIDE: Self = Self(-0.5, -0.5, 2.0, 2.0);
    /// `-30% -30% 160% 160%`.
    pub const SHADOW: Self = Self(-0.3, -0.3, 1.6, 1.6);
    /// `-100% -100% 300% 300%`.
    pub const HUGE: Self = Self(-1.0, -1.0, 3.0, 3.0);
}

/// Static visual resource declared once per layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Def {
    /// Linear gradient in bounding-box units.
    Linear {
        /// Scoped id.
        id: ResourceId,
        /// `[x1, y1, x2, y2]` as fractions.
        vector: [f64; 4],
        /// Stops.
        stops: Vec<Stop>,
    },
    /// Radial gradient in bounding-box units.
    Radial {
        /// Scoped id.
        id: ResourceId,
        /// `[cx, cy, r]` as fractions.
        geometry: [f64; 3],
        /// Stops.
        stops: Vec<Stop>,
    },
    /// Filter pipeline.
    Filter {
        /// Scoped id.
        id: ResourceId,
        /// Optional explicit region; the SVG default applies otherwise.
        region: Option<FilterRegion>,
        /// Pipeline.
        kind: FilterKind,
    },
    /// Tile in user space.
    Pattern {
        /// Scoped id.
        id: ResourceId,
        /// Tile width.
        width: f64,
        /// Tile height.
        height: f64,
        /// Tile content.
        children: Vec<Node>,
    },
}

impl Def {
    /// Left-to-right linear gradient.
    pub fn horizontal(id: ResourceId, stops: Vec<Stop>) -> Self {
        Self::Linear {
            id,
            vector: [0.0, 0.0, 1.0, 0.0],
            stops,
        }
    }

    /// Top-to-bottom linear gradient.
    pub fn vertical(id: ResourceId, stops: Vec<Stop>) -> Self {
        Self::Linear {
            id,
            vector: [0.0, 0.0, 0.0, 1.0],
            stops,
        }
    }

    /// Top-left to bottom-right linear gradient.
    pub fn diagonal(id: ResourceId, stops: Vec<Stop>) -> Self {
        Self::Linear {
            id,
            vector: [0.0, 0.0, 1.0, 1.0],
            stops,
        }
    }

    /// Radial gradient centered at `(cx, cy)` with radius `r`.
    pub fn radial(id: ResourceId, cx: f64, cy: f64, r: f64, stops: Vec<Stop>) -> Self {
        Self::Radial {
            id,
            geometry: [cx, cy, r],
            stops,
        }
    }

    /// Glow filter (`blur` merged with `SourceGraphic`).
    pub fn glow(id: ResourceId, region: FilterRegion, std_dev: f64) -> Self {
        Self::Filter {
            id,
            region: Some(region),
            kind: FilterKind::Glow { std_dev },
        }
    }

    /// Blur filter with the default region.
    pub fn blur(id: ResourceId, std_dev: f64) -> Self {
        Self::Filter {
            id,
            region: None,
            kind: FilterKind::Blur { std_dev },
        }
    }

    /// Drop-shadow filter.
    pub fn drop_shadow(id: ResourceId, dy: f64, std_dev: f64, color: Color) -> Self {
        Self::Filter {
            id,
            region: Some(FilterRegion::SHADOW),
            kind: FilterKind::DropShadow {
                dx: 0.0,
                dy,
                std_dev,
                color,
            },
        }
    }

    /// The scoped id of this definition.
    pub fn id(&self) -> &ResourceId {
        match self {
            Self::Linear { id, .. }
            | Self::Radial { id, .. }
            | Self::Filter { id, .. }
            | Self::Pattern { id, .. } => id,
        }
    }
}
