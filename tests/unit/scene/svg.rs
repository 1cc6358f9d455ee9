use super::*;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::scene::color::Color;
use crate::scene::defs::stop;
use crate::scene::layer::{Placement, Viewport};
use crate::scene::model::Font;
use crate::scene::resource::ResourceScope;

fn one_layer_scene(layer: Layer) -> Scene {
    Scene {
        canvas: Canvas {
            width: 400,
            height: 300,
        },
        frame: FrameIndex(0),
        scope: ResourceScope::new("Svg", 0),
        background: None,
        layers: vec![layer],
    }
}

#[test]
fn numbers_are_trimmed_and_negative_zero_normalized() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.25), "0.25");
    assert_eq!(num(1.0 / 3.0), "0.3333");
    assert_eq!(num(-0.00001), "0");
    assert_eq!(num(-2.5), "-2.5");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn text_is_escaped() {
    let mut layer = Layer::new("t", Viewport::new(10.0, 10.0, 10.0, 10.0), Placement::default());
    layer.push(Shape::text((0.0, 5.0), "a<b & \"c\"", Font::ui(6.0)).fill(Color::WHITE));
    let svg = one_layer_scene(layer).to_svg();
    assert!(svg.contains(">a&lt;b &amp; &quot;c&quot;</text>"));
}

#[test]
fn layer_becomes_placed_nested_viewport() {
    let layer = Layer::new(
        "content",
        Viewport::new(200.0, 180.0, 300.0, 270.0),
        Placement {
            lift: -130.0,
            ..Placement::default()
        },
    );
    let svg = one_layer_scene(layer).to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"300\""));
    assert!(svg.contains("transform=\"matrix(1 0 0 1 50 -115)\""));
    assert!(svg.contains("<svg x=\"0\" y=\"0\" width=\"300\" height=\"270\" viewBox=\"0 0 200 180\">"));
}

#[test]
fn defs_and_styles_serialize() {
    let scope = ResourceScope::new("Svg", 0);
    let grad = scope.id("grad");
    let shadow = scope.id("shadow");
    let mut layer = Layer::new("p", Viewport::new(10.0, 10.0, 10.0, 10.0), Placement::default());
    layer.def(Def::horizontal(
        grad.clone(),
        vec![
            stop(0.0, Color::hex(0x40c0f0).with_alpha(0.0)),
            stop(0.5, Color::hex(0x60e0ff)),
        ],
    ));
    layer.def(Def::drop_shadow(
        shadow.clone(),
        8.0,
        12.0,
        Color::hex(0x1a3050).with_alpha(0.35),
    ));
    layer.push(
        Shape::rect(1.0, 2.0, 3.0, 4.0)
            .rounded(2.0)
            .fill(&grad)
            .stroke(Color::rgba(255, 255, 255, 0.3), 1.0)
            .dashed(&[4.0, 4.0])
            .filter(&shadow)
            .opacity(0.5),
    );
    let svg = one_layer_scene(layer).to_svg();

    assert!(svg.contains("<linearGradient id=\"Svg-0-grad\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">"));
    assert!(svg.contains("<stop offset=\"0%\" stop-color=\"#40c0f0\" stop-opacity=\"0\"/>"));
    assert!(svg.contains("<stop offset=\"50%\" stop-color=\"#60e0ff\"/>"));
    assert!(svg.contains("<filter id=\"Svg-0-shadow\" x=\"-30%\" y=\"-30%\" width=\"160%\" height=\"160%\">"));
    assert!(svg.contains("flood-color=\"#1a3050\" flood-opacity=\"0.35\""));
    assert!(svg.contains(
        "<rect x=\"1\" y=\"2\" width=\"3\" height=\"4\" rx=\"2\" ry=\"2\" fill=\"url(#Svg-0-grad)\" stroke=\"#ffffff\" stroke-opacity=\"0.3\" stroke-width=\"1\" stroke-dasharray=\"4,4\" opacity=\"0.5\" filter=\"url(#Svg-0-shadow)\"/>"
    ));
}

#[test]
fn background_rect_precedes_layers() {
    let mut scene = one_layer_scene(Layer::new(
        "a",
        Viewport::new(1.0, 1.0, 1.0, 1.0),
        Placement::default(),
    ));
    scene.background = Some(Color::hex(0x102030));
    let svg = scene.to_svg();
    let bg = svg.find("fill=\"#102030\"").unwrap();
    let layer = svg.find("data-layer=\"a\"").unwrap();
    assert!(bg < layer);
}

#[test]
fn serialization_is_byte_identical() {
    let mut layer = Layer::new("a", Viewport::new(10.0, 10.0, 10.0, 10.0), Placement::default());
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.quad_to((1.0, 2.0), (3.0, 4.0));
    p.close_path();
    layer.push(Shape::path(p).fill(Color::WHITE));
    let scene = one_layer_scene(layer);
    assert_eq!(scene.to_svg(), scene.to_svg());
    assert!(scene.to_svg().contains("<path d=\"M 0 0 Q 1 2 3 4 Z\" fill=\"#ffffff\"/>"));
}
