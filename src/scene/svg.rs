//! Deterministic SVG serialization of a [`Scene`].
//!
//! Numbers are rounded to four decimals with trailing zeros trimmed so that the same scene always
//! serializes to the same bytes.

use kurbo::PathEl;

use crate::foundation::core::{Affine, BezPath};
use crate::scene::defs::{Def, FilterKind, FilterRegion, Stop};
use crate::scene::layer::{Layer, Scene};
use crate::scene::model::{Group, LineCap, Node, Paint, Primitive, Shape, Style, TextAnchor};

/// Serialize `scene` into a standalone SVG document.
pub fn to_svg_document(scene: &Scene) -> String {
    let w = scene.canvas.width;
    let h = scene.canvas.height;
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    if let Some(bg) = scene.background {
        out.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\"{}/>\n",
            paint_attrs("fill", &Paint::Solid(bg))
        ));
    }
    for layer in &scene.layers {
        write_layer(&mut out, scene, layer);
    }
    out.push_str("</svg>\n");
    out
}

/// Format a number with at most four decimals and no trailing zeros.
pub(crate) fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let r = (v * 10_000.0).round() / 10_000.0;
    let mut s = format!("{r:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

fn pct(v: f64) -> String {
    format!("{}%", num(v * 100.0))
}

fn matrix(a: Affine) -> String {
    let c = a.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        num(c[0]),
        num(c[1]),
        num(c[2]),
        num(c[3]),
        num(c[4]),
        num(c[5])
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn write_layer(out: &mut String, scene: &Scene, layer: &Layer) {
    let vp = &layer.viewport;
    let t = layer.placement.affine(scene.canvas, vp);
    out.push_str(&format!(
        "<g data-layer=\"{}\" transform=\"{}\">\n<svg x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        layer.name,
        matrix(t),
        num(vp.width),
        num(vp.height),
        num(vp.view_width),
        num(vp.view_height)
    ));
    if !layer.defs.is_empty() {
        out.push_str("<defs>\n");
        for d in &layer.defs {
            write_def(out, d);
        }
        out.push_str("</defs>\n");
    }
    for n in &layer.nodes {
        write_node(out, n);
    }
    out.push_str("</svg>\n</g>\n");
}

fn write_stops(out: &mut String, stops: &[Stop]) {
    for s in stops {
        let mut attrs = format!(
            "offset=\"{}\" stop-color=\"{}\"",
            pct(s.offset),
            s.color.to_hex()
        );
        if s.color.a < 1.0 {
            attrs.push_str(&format!(" stop-opacity=\"{}\"", num(s.color.a)));
        }
        out.push_str(&format!("<stop {attrs}/>\n"));
    }
}

fn region_attrs(region: Option<FilterRegion>) -> String {
    match region {
        Some(FilterRegion(x, y, w, h)) => format!(
            " x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            pct(x),
            pct(y),
            pct(w),
            pct(h)
        ),
        None => String::new(),
    }
}

fn write_def(out: &mut String, d: &Def) {
    match d {
        Def::Linear { id, vector, stops } => {
            out.push_str(&format!(
                "<linearGradient id=\"{id}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">\n",
                pct(vector[0]),
                pct(vector[1]),
                pct(vector[2]),
                pct(vector[3])
            ));
            write_stops(out, stops);
            out.push_str("</linearGradient>\n");
        }
        Def::Radial {
            id,
            geometry,
            stops,
        } => {
            out.push_str(&format!(
                "<radialGradient id=\"{id}\" cx=\"{}\" cy=\"{}\" r=\"{}\">\n",
                pct(geometry[0]),
                pct(geometry[1]),
                pct(geometry[2])
            ));
            write_stops(out, stops);
            out.push_str("</radialGradient>\n");
        }
        Def::Filter { id, region, kind } => {
            out.push_str(&format!("<filter id=\"{id}\"{}>\n", region_attrs(*region)));
            match kind {
                FilterKind::Glow { std_dev } => {
                    out.push_str(&format!(
                        "<feGaussianBlur stdDeviation=\"{}\" result=\"blur\"/>\n",
                        num(*std_dev)
                    ));
                    out.push_str(
                        "<feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>\n",
                    );
                }
                FilterKind::Blur { std_dev } => {
                    out.push_str(&format!(
                        "<feGaussianBlur stdDeviation=\"{}\"/>\n",
                        num(*std_dev)
                    ));
                }
                FilterKind::DropShadow {
                    dx,
                    dy,
                    std_dev,
                    color,
                } => {
                    out.push_str(&format!(
                        "<feDropShadow dx=\"{}\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/>\n",
                        num(*dx),
                        num(*dy),
                        num(*std_dev),
                        color.to_hex(),
                        num(color.a)
                    ));
                }
            }
            out.push_str("</filter>\n");
        }
        Def::Pattern {
            id,
            width,
            height,
            children,
        } => {
            out.push_str(&format!(
                "<pattern id=\"{id}\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" patternUnits=\"userSpaceOnUse\">\n",
                num(*width),
                num(*height)
            ));
            for n in children {
                write_node(out, n);
            }
            out.push_str("</pattern>\n");
        }
    }
}

fn paint_attrs(attr: &str, paint: &Paint) -> String {
    match paint {
        Paint::None => format!(" {attr}=\"none\""),
        Paint::Solid(c) if c.a < 1.0 => {
            format!(" {attr}=\"{}\" {attr}-opacity=\"{}\"", c.to_hex(), num(c.a))
        }
        Paint::Solid(c) => format!(" {attr}=\"{}\"", c.to_hex()),
        Paint::Ref(id) => format!(" {attr}=\"url(#{id})\""),
    }
}

fn style_attrs(style: &Style) -> String {
    let mut s = paint_attrs("fill", &style.fill);
    if let Some(stroke) = &style.stroke {
        s.push_str(&paint_attrs("stroke", &stroke.paint));
        s.push_str(&format!(" stroke-width=\"{}\"", num(stroke.width)));
        if !stroke.dash.is_empty() {
            let dash: Vec<String> = stroke.dash.iter().map(|d| num(*d)).collect();
            s.push_str(&format!(" stroke-dasharray=\"{}\"", dash.join(",")));
        }
        if stroke.cap == LineCap::Round {
            s.push_str(" stroke-linecap=\"round\"");
        }
    }
    if style.opacity < 1.0 {
        s.push_str(&format!(" opacity=\"{}\"", num(style.opacity)));
    }
    if let Some(id) = &style.filter {
        s.push_str(&format!(" filter=\"url(#{id})\""));
    }
    s
}

fn path_data(p: &BezPath) -> String {
    let mut parts: Vec<String> = Vec::new();
    for el in p.elements() {
        parts.push(match el {
            PathEl::MoveTo(a) => format!("M {} {}", num(a.x), num(a.y)),
            PathEl::LineTo(a) => format!("L {} {}", num(a.x), num(a.y)),
            PathEl::QuadTo(a, b) => {
                format!("Q {} {} {} {}", num(a.x), num(a.y), num(b.x), num(b.y))
            }
            PathEl::CurveTo(a, b, c) => format!(
                "C {} {} {} {} {} {}",
                num(a.x),
                num(a.y),
                num(b.x),
                num(b.y),
                num(c.x),
                num(c.y)
            ),
            PathEl::ClosePath => "Z".to_owned(),
        });
    }
    parts.join(" ")
}

fn write_shape(out: &mut String, shape: &Shape) {
    let style = style_attrs(&shape.style);
    let line = match &shape.prim {
        Primitive::Ellipse { center, rx, ry } => format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"{style}/>",
            num(center.x),
            num(center.y),
            num(*rx),
            num(*ry)
        ),
        Primitive::Circle { center, r } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{style}/>",
            num(center.x),
            num(center.y),
            num(*r)
        ),
        Primitive::Rect { rect, radius } => {
            let corner = if *radius > 0.0 {
                format!(" rx=\"{0}\" ry=\"{0}\"", num(*radius))
            } else {
                String::new()
            };
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{corner}{style}/>",
                num(rect.x0),
                num(rect.y0),
                num(rect.width()),
                num(rect.height())
            )
        }
        Primitive::Line { from, to } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{style}/>",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y)
        ),
        Primitive::Path(p) => format!("<path d=\"{}\"{style}/>", path_data(p)),
        Primitive::Text {
            origin,
            content,
            font,
        } => {
            let mut attrs = format!(
                " font-size=\"{}\" font-family=\"{}\"",
                num(font.size),
                escape_xml(font.family)
            );
            if font.bold {
                attrs.push_str(" font-weight=\"bold\"");
            }
            if font.anchor == TextAnchor::Middle {
                attrs.push_str(" text-anchor=\"middle\"");
            }
            format!(
                "<text x=\"{}\" y=\"{}\"{attrs}{style}>{}</text>",
                num(origin.x),
                num(origin.y),
                escape_xml(content)
            )
        }
    };
    out.push_str(&line);
    out.push('\n');
}

fn write_group(out: &mut String, g: &Group) {
    let mut attrs = String::new();
    if g.transform != Affine::IDENTITY {
        attrs.push_str(&format!(" transform=\"{}\"", matrix(g.transform)));
    }
    if g.opacity < 1.0 {
        attrs.push_str(&format!(" opacity=\"{}\"", num(g.opacity)));
    }
    if let Some(id) = &g.filter {
        attrs.push_str(&format!(" filter=\"url(#{id})\""));
    }
    out.push_str(&format!("<g{attrs}>\n"));
    for n in &g.children {
        write_node(out, n);
    }
    out.push_str("</g>\n");
}

fn write_node(out: &mut String, n: &Node) {
    match n {
        Node::Shape(s) => write_shape(out, s),
        Node::Group(g) => write_group(out, g),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
