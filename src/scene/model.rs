use crate::foundation::core::{Affine, BezPath, Point, Rect, Vec2};
use crate::foundation::math::unit;
use crate::scene::color::Color;
use crate::scene::resource::ResourceId;

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Paint {
    /// Nothing is painted.
    None,
    /// Flat color.
    Solid(Color),
    /// Gradient or pattern declared in the layer's definitions.
    Ref(ResourceId),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

impl From<ResourceId> for Paint {
    fn from(id: ResourceId) -> Self {
        Self::Ref(id)
    }
}

impl From<&ResourceId> for Paint {
    fn from(id: &ResourceId) -> Self {
        Self::Ref(id.clone())
    }
}

/// Stroke line cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum LineCap {
    /// Flat end at the endpoint.
    Butt,
    /// Semicircular end.
    Round,
}

/// Stroke parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Stroke source.
    pub paint: Paint,
    /// Width in view box units.
    pub width: f64,
    /// Dash pattern, empty for a solid line.
    pub dash: Vec<f64>,
    /// Line cap.
    pub cap: LineCap,
}

/// Visual style of a single shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Style {
    /// Fill source.
    pub fill: Paint,
    /// Optional stroke.
    pub stroke: Option<Stroke>,
    /// Element opacity in `[0, 1]`.
    pub opacity: f64,
    /// Optional filter reference.
    pub filter: Option<ResourceId>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Paint::None,
            stroke: None,
            opacity: 1.0,
            filter: None,
        }
    }
}

/// Horizontal anchor of a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TextAnchor {
    /// `x` is the left edge.
    Start,
    /// `x` is the center.
    Middle,
}

/// Font selection for a text run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Font {
    /// CSS font-family list.
    pub family: &'static str,
    /// Size in view box units.
    pub size: f64,
    /// Bold weight when `true`.
    pub bold: bool,
    /// Anchor.
    pub anchor: TextAnchor,
}

impl Font {
    /// Sans-serif UI text.
    pub fn ui(size: f64) -> Self {
        Self {
            family: "system-ui, sans-serif",
            size,
            bold: false,
            anchor: TextAnchor::Start,
        }
    }

    /// Monospaced terminal text.
    pub fn mono(size: f64) -> Self {
        Self {
            family: "Monaco, monospace",
            ..Self::ui(size)
        }
    }

    /// Bold variant.
    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Centered variant.
    pub fn centered(self) -> Self {
        Self {
            anchor: TextAnchor::Middle,
            ..self
        }
    }
}

/// Geometry of a drawable.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Primitive {
    /// Axis-aligned ellipse.
    Ellipse {
        /// Center.
        center: Point,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// Circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        r: f64,
    },
    /// Rectangle with optional rounded corners.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f64,
    },
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Arbitrary Bézier path.
    Path(BezPath),
    /// Single-line text run with its baseline origin.
    Text {
        /// Baseline origin.
        origin: Point,
        /// Content.
        content: String,
        /// Font.
        font: Font,
    },
}

/// A primitive with its style.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Shape {
    /// Geometry.
    pub prim: Primitive,
    /// Style.
    pub style: Style,
}

impl Shape {
    fn of(prim: Primitive) -> Self {
        Self {
            prim,
            style: Style::default(),
        }
    }

    /// Ellipse centered at `c`.
    pub fn ellipse(c: impl Into<Point>, rx: f64, ry: f64) -> Self {
        Self::of(Primitive::Ellipse {
            center: c.into(),
            rx,
            ry,
        })
    }

    /// Circle centered at `c`.
    pub fn circle(c: impl Into<Point>, r: f64) -> Self {
        Self::of(Primitive::Circle {
            center: c.into(),
            r,
        })
    }

    /// Rectangle from origin and size.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::of(Primitive::Rect {
            rect: Rect::new(x, y, x + w, y + h),
            radius: 0.0,
        })
    }

    /// Segment `from -> to`.
    pub fn line(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self::of(Primitive::Line {
            from: from.into(),
            to: to.into(),
        })
    }

    /// Path shape.
    pub fn path(p: BezPath) -> Self {
        Self::of(Primitive::Path(p))
    }

    /// Text run.
    pub fn text(origin: impl Into<Point>, content: impl Into<String>, font: Font) -> Self {
        Self::of(Primitive::Text {
            origin: origin.into(),
            content: content.into(),
            font,
        })
    }

    /// Set the corner radius (rectangles only).
    pub fn rounded(mut self, r: f64) -> Self {
        if let Primitive::Rect { radius, .. } = &mut self.prim {
            *radius = r;
        }
        self
    }

    /// Set the fill.
    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.style.fill = paint.into();
        self
    }

    /// Set a solid stroke.
    pub fn stroke(mut self, paint: impl Into<Paint>, width: f64) -> Self {
        self.style.stroke = Some(Stroke {
            paint: paint.into(),
            width,
            dash: Vec::new(),
            cap: LineCap::Butt,
        });
        self
    }

    /// Dash the current stroke.
    pub fn dashed(mut self, pattern: &[f64]) -> Self {
        if let Some(s) = &mut self.style.stroke {
            s.dash = pattern.to_vec();
        }
        self
    }

    /// Round the caps of the current stroke.
    pub fn round_cap(mut self) -> Self {
        if let Some(s) = &mut self.style.stroke {
            s.cap = LineCap::Round;
        }
        self
    }

    /// Set the element opacity, clamped into `[0, 1]`.
    pub fn opacity(mut self, v: f64) -> Self {
        self.style.opacity = unit(v);
        self
    }

    /// Apply a filter.
    pub fn filter(mut self, id: &ResourceId) -> Self {
        self.style.filter = Some(id.clone());
        self
    }
}

/// A group of nodes sharing a transform, opacity and filter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Group {
    /// Transform applied to the children.
    pub transform: Affine,
    /// Group opacity in `[0, 1]`.
    pub opacity: f64,
    /// Optional filter reference.
    pub filter: Option<ResourceId>,
    /// Children, back to front.
    pub children: Vec<Node>,
}

impl Group {
    /// Identity group around `children`.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            transform: Affine::IDENTITY,
            opacity: 1.0,
            filter: None,
            children,
        }
    }

    /// Apply a filter to the whole group.
    pub fn filter(mut self, id: &ResourceId) -> Self {
        self.filter = Some(id.clone());
        self
    }

    /// Set the group transform.
    pub fn transform(mut self, t: Affine) -> Self {
        self.transform = t;
        self
    }
}

/// Scene tree node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Node {
    /// Leaf drawable.
    Shape(Shape),
    /// Nested group.
    Group(Group),
}

impl From<Shape> for Node {
    fn from(s: Shape) -> Self {
        Self::Shape(s)
    }
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Self::Group(g)
    }
}

/// Append an SVG-style elliptical arc (`A rx ry 0 large sweep to`) to `path`.
///
/// Degenerate arcs (zero radius, coincident endpoints) become a straight segment.
pub fn arc_to(path: &mut BezPath, from: Point, to: Point, radii: Vec2, large_arc: bool, sweep: bool) {
    let svg_arc = kurbo::SvgArc {
        from,
        to,
        radii,
        x_rotation: 0.0,
        large_arc,
        sweep,
    };
    match kurbo::Arc::from_svg_arc(&svg_arc) {
        Some(arc) => {
            for el in arc.append_iter(0.1) {
                path.push(el);
            }
        }
        None => path.line_to(to),
    }
}

/// Closed polygon through `points`.
pub fn polygon(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        p.move_to(*first);
        for pt in rest {
            p.line_to(*pt);
        }
        p.close_path();
    }
    p
}

/// Open polyline through `points`.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        p.move_to(*first);
        for pt in rest {
            p.line_to(*pt);
        }
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
