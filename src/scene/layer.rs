use std::collections::BTreeSet;

use crate::foundation::core::{Affine, Canvas, FrameIndex};
use crate::foundation::error::{IconError, IconResult};
use crate::foundation::math::Fnv1a64;
use crate::scene::color::Color;
use crate::scene::defs::{Def, FilterKind};
use crate::scene::model::{Node, Paint, Shape};
use crate::scene::resource::{ResourceId, ResourceScope};

/// View box and display size of a layer's local coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    /// View box width.
    pub view_width: f64,
    /// View box height.
    pub view_height: f64,
    /// Displayed width in canvas pixels.
    pub width: f64,
    /// Displayed height in canvas pixels.
    pub height: f64,
}

impl Viewport {
    /// View box `0 0 view_width view_height` displayed at `width x height`.
    pub const fn new(view_width: f64, view_height: f64, width: f64, height: f64) -> Self {
        Self {
            view_width,
            view_height,
            width,
            height,
        }
    }
}

/// Where a layer sits relative to the canvas center.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Constant vertical shift in pixels (negative lifts the layer).
    pub lift: f64,
    /// Animated vertical offset in pixels.
    pub y_offset: f64,
    /// Rotation about the layer's vertical axis, in degrees.
    pub rotate_y_deg: f64,
}

impl Placement {
    /// Map the layer's display box into canvas space.
    ///
    /// The box is centered on the canvas, shifted by `lift + y_offset`, and `rotateY` is
    /// projected orthographically, i.e. a horizontal scale by `cos(angle)` about the box center.
    pub fn affine(&self, canvas: Canvas, vp: &Viewport) -> Affine {
        let c = canvas.center();
        let squash = self.rotate_y_deg.to_radians().cos();
        Affine::translate((c.x, c.y + self.lift + self.y_offset))
            * Affine::scale_non_uniform(squash, 1.0)
            * Affine::translate((-vp.width / 2.0, -vp.height / 2.0))
    }
}

/// One independently placed vector layer (the pedestal, or an icon's content).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    /// Short name used in diagnostics.
    pub name: &'static str,
    /// Local coordinate system.
    pub viewport: Viewport,
    /// Placement on the canvas.
    pub placement: Placement,
    /// Resources declared by this layer.
    pub defs: Vec<Def>,
    /// Drawables, back to front.
    pub nodes: Vec<Node>,
}

impl Layer {
    /// Empty layer.
    pub fn new(name: &'static str, viewport: Viewport, placement: Placement) -> Self {
        Self {
            name,
            viewport,
            placement,
            defs: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Declare a resource.
    pub fn def(&mut self, d: Def) {
        self.defs.push(d);
    }

    /// Append a node on top of what is already drawn.
    pub fn push(&mut self, n: impl Into<Node>) {
        self.nodes.push(n.into());
    }

    /// Append several nodes in order.
    pub fn extend<I, N>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
    }
}

/// Complete description of one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    /// Output canvas.
    pub canvas: Canvas,
    /// Frame this scene describes.
    pub frame: FrameIndex,
    /// Namespace of all resource ids in this scene.
    pub scope: ResourceScope,
    /// Optional opaque backdrop; transparent when `None`.
    pub background: Option<Color>,
    /// Layers, back to front.
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Check that resource ids are unique and every reference resolves.
    pub fn validate(&self) -> IconResult<()> {
        let mut declared = BTreeSet::new();
        for layer in &self.layers {
            for d in &layer.defs {
                if !declared.insert(d.id().clone()) {
                    return Err(IconError::validation(format!(
                        "duplicate resource id '{}' in layer '{}'",
                        d.id(),
                        layer.name
                    )));
                }
            }
        }

        let mut dangling: Option<ResourceId> = None;
        self.visit_refs(&mut |id| {
            if dangling.is_none() && !declared.contains(id) {
                dangling = Some(id.clone());
            }
        });
        match dangling {
            Some(id) => Err(IconError::validation(format!(
                "reference to undeclared resource '{id}'"
            ))),
            None => Ok(()),
        }
    }

    /// Call `f` for every resource reference in the scene.
    pub fn visit_refs(&self, f: &mut impl FnMut(&ResourceId)) {
        for layer in &self.layers {
            for d in &layer.defs {
                if let Def::Pattern { children, .. } = d {
                    visit_nodes(children, &mut |n| node_refs(n, &mut *f));
                }
            }
            visit_nodes(&layer.nodes, &mut |n| node_refs(n, &mut *f));
        }
    }

    /// Call `f` for every opacity-like value in the scene: element and group opacities, color
    /// alphas of fills, strokes and gradient stops, and shadow flood opacities.
    pub fn visit_opacities(&self, f: &mut impl FnMut(f64)) {
        for layer in &self.layers {
            for d in &layer.defs {
                match d {
                    Def::Linear { stops, .. } | Def::Radial { stops, .. } => {
                        stops.iter().for_each(|s| f(s.color.a));
                    }
                    Def::Filter {
                        kind: FilterKind::DropShadow { color, .. },
                        ..
                    } => f(color.a),
                    Def::Filter { .. } => {}
                    Def::Pattern { children, .. } => {
                        visit_nodes(children, &mut |n| node_opacities(n, &mut *f));
                    }
                }
            }
            visit_nodes(&layer.nodes, &mut |n| node_opacities(n, &mut *f));
        }
    }

    /// Number of leaf shapes across all layers.
    pub fn shape_count(&self) -> usize {
        let mut n = 0usize;
        for layer in &self.layers {
            visit_nodes(&layer.nodes, &mut |node| {
                if matches!(node, Node::Shape(_)) {
                    n += 1;
                }
            });
        }
        n
    }

    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        crate::scene::svg::to_svg_document(self)
    }

    /// Stable 64-bit fingerprint of the serialized scene, usable as a cache key.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.to_svg().as_bytes());
        h.finish()
    }

    /// Find a layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// Depth-first, pre-order walk over `nodes`.
pub(crate) fn visit_nodes<'a>(nodes: &'a [Node], f: &mut impl FnMut(&'a Node)) {
    for n in nodes {
        f(n);
        if let Node::Group(g) = n {
            visit_nodes(&g.children, &mut *f);
        }
    }
}

fn node_refs(n: &Node, f: &mut impl FnMut(&ResourceId)) {
    match n {
        Node::Shape(s) => shape_refs(s, f),
        Node::Group(g) => {
            if let Some(id) = &g.filter {
                f(id);
            }
        }
    }
}

fn shape_refs(s: &Shape, f: &mut impl FnMut(&ResourceId)) {
    if let Paint::Ref(id) = &s.style.fill {
        f(id);
    }
    if let Some(stroke) = &s.style.stroke
        && let Paint::Ref(id) = &stroke.paint
    {
        f(id);
    }
    if let Some(id) = &s.style.filter {
        f(id);
    }
}

fn node_opacities(n: &Node, f: &mut impl FnMut(f64)) {
    match n {
        Node::Shape(s) => {
            f(s.style.opacity);
            if let Paint::Solid(c) = &s.style.fill {
                f(c.a);
            }
            if let Some(stroke) = &s.style.stroke
                && let Paint::Solid(c) = &stroke.paint
            {
                f(c.a);
            }
        }
        Node::Group(g) => f(g.opacity),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layer.rs"]
mod tests;
