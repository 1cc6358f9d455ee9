use std::f64::consts::TAU;

use crate::animation::wave::{osc, travel};
use crate::foundation::core::{BezPath, FrameIndex, Point};
use crate::foundation::math::{lerp_point, wrap};
use crate::layers::{ContentPose, LayerCtx, content_layer, light};
use crate::scene::color::Color;
use crate::scene::defs::{Def, FilterRegion, stop};
use crate::scene::layer::{Layer, Viewport};
use crate::scene::model::{Font, Group, Node, Shape};

/// `(x, y, size)` of each neuron.
pub const NEURONS: [(f64, f64, f64); 9] = [
    (110.0, 60.0, 8.0),
    (80.0, 80.0, 6.0),
    (140.0, 80.0, 6.0),
    (65.0, 110.0, 5.0),
    (110.0, 100.0, 10.0),
    (155.0, 110.0, 5.0),
    (80.0, 135.0, 6.0),
    (140.0, 135.0, 6.0),
    (110.0, 155.0, 7.0),
];

/// Neuron index pairs joined by an edge.
pub const EDGES: [(usize, usize); 14] = [
    (0, 1),
    (0, 2),
    (0, 4),
    (1, 3),
    (1, 4),
    (2, 4),
    (2, 5),
    (3, 6),
    (4, 6),
    (4, 7),
    (5, 7),
    (6, 8),
    (7, 8),
    (4, 8),
];

fn neuron(i: usize) -> Point {
    let (x, y, _) = NEURONS[i];
    Point::new(x, y)
}

/// Position of the pulse travelling along edge `i`.
///
/// The phase wraps at 2π and each edge position wraps at 1, so pulses jump back to their start
/// node in a sawtooth.
pub fn pulse(frame: FrameIndex, i: usize) -> Point {
    let phase = wrap(0.1 * frame.as_f64(), TAU);
    let pos = wrap(phase + 0.5 * i as f64, 1.0);
    let (a, b) = EDGES[i];
    lerp_point(neuron(a), neuron(b), pos)
}

/// Radius of neuron `i`, breathing ±20 % around its size.
pub fn neuron_radius(frame: FrameIndex, i: usize) -> f64 {
    NEURONS[i].2 * (1.0 + 0.2 * osc(frame, 0.15, 0.8 * i as f64))
}

pub(crate) fn render(pose: ContentPose, ctx: &LayerCtx<'_>) -> Layer {
    let mut layer = content_layer(Viewport::new(220.0, 200.0, 330.0, 300.0), -115.0, pose);

    let chip = ctx.id("brainBg");
    let fill = ctx.id("neuron");
    let shadow = ctx.id("brainShadow");
    let glow = ctx.id("neuronGlow");
    let pulse_glow = ctx.id("pulseGlow");
    let grid = ctx.id("chipPattern");

    layer.def(Def::diagonal(
        chip.clone(),
        vec![
            stop(0.0, Color::hex(0x1a2a40).with_alpha(0.95)),
            stop(1.0, Color::hex(0x0a1525).with_alpha(0.95)),
        ],
    ));
    layer.def(Def::diagonal(
        fill.clone(),
        vec![stop(0.0, Color::hex(0x60d8ff)), stop(1.0, Color::hex(0x3090d0))],
    ));
    layer.def(Def::drop_shadow(
        shadow.clone(),
        6.0,
        10.0,
        Color::hex(0x1a3050).with_alpha(0.4),
    ));
    layer.def(Def::glow(glow.clone(), FilterRegion::HUGE, 4.0));
    layer.def(Def::glow(pulse_glow.clone(), FilterRegion::HUGE, 6.0));
    layer.def(Def::Pattern {
        id: grid.clone(),
        width: 20.0,
        height: 20.0,
        children: vec![
            Shape::path(crosshair(20.0))
                .stroke(Color::rgba(80, 160, 220, 0.1), 0.5)
                .into(),
        ],
    });

    layer.push(
        Shape::rect(30.0, 25.0, 160.0, 150.0)
            .rounded(12.0)
            .fill(&chip)
            .filter(&shadow),
    );
    layer.push(
        Shape::rect(30.0, 25.0, 160.0, 150.0)
            .rounded(12.0)
            .fill(&grid),
    );
    layer.push(
        Shape::rect(33.0, 28.0, 154.0, 144.0)
            .rounded(10.0)
            .stroke(Color::hex(0x40a0d0), 2.0)
            .opacity(0.6),
    );

    let pin = |x, y, w, h| -> Node {
        Shape::rect(x, y, w, h)
            .rounded(2.0)
            .fill(Color::hex(0x50b8e0))
            .opacity(0.7)
            .into()
    };
    for i in 0..5 {
        let x = 50.0 + 25.0 * f64::from(i);
        layer.push(Group::new(vec![
            pin(x, 15.0, 10.0, 15.0),
            pin(x, 170.0, 10.0, 15.0),
        ]));
    }
    for i in 0..4 {
        let y = 50.0 + 30.0 * f64::from(i);
        layer.push(Group::new(vec![
            pin(15.0, y, 15.0, 10.0),
            pin(190.0, y, 15.0, 10.0),
        ]));
    }

    for (i, &(a, b)) in EDGES.iter().enumerate() {
        layer.push(Group::new(vec![
            Shape::line(neuron(a), neuron(b))
                .stroke(Color::hex(0x40a0d0), 1.5)
                .opacity(0.5)
                .into(),
            Shape::circle(pulse(ctx.frame, i), 3.0)
                .fill(Color::hex(0x80e0ff))
                .filter(&pulse_glow)
                .opacity(0.8)
                .into(),
        ]));
    }

    for (i, &(x, y, size)) in NEURONS.iter().enumerate() {
        layer.push(
            Group::new(vec![
                Shape::circle((x, y), neuron_radius(ctx.frame, i))
                    .fill(&fill)
                    .into(),
                Shape::circle((x, y), size * 0.5)
                    .fill(Color::WHITE)
                    .opacity(0.6)
                    .into(),
            ])
            .filter(&glow),
        );
    }

    layer.push(
        Shape::text((110.0, 105.0), "AI", Font::ui(16.0).bold().centered())
            .fill(Color::hex(0x80e0ff))
            .filter(&glow),
    );

    for i in 0..3 {
        let p = travel(ctx.frame, 0.02, 0.33 * f64::from(i));
        let scale = 0.5 + 0.6 * p;
        layer.push(
            Shape::ellipse((110.0, 100.0), 80.0 * scale, 60.0 * scale)
                .stroke(Color::hex(0x60d8ff), 2.0)
                .opacity(0.3 * (1.0 - p)),
        );
    }

    layer.push(light((175.0, 35.0), 2.5, 0x70e0ff, 0.6, (0.1, 0.0), ctx.frame));
    layer.push(light((183.0, 43.0), 1.5, 0x50c8f0, 0.5, (0.12, 1.0), ctx.frame));

    layer
}

/// Grid tile: one horizontal and one vertical line through the middle.
fn crosshair(size: f64) -> BezPath {
    let half = size / 2.0;
    let mut p = BezPath::new();
    p.move_to((0.0, half));
    p.line_to((size, half));
    p.move_to((half, 0.0));
    p.line_to((half, size));
    p
}

#[cfg(test)]
#[path = "../../tests/unit/layers/neural.rs"]
mod tests;
