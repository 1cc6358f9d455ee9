use std::f64::consts::{PI, TAU};

use crate::animation::wave::{osc, travel};
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::math::lerp_point;
use crate::layers::{ContentPose, LayerCtx, content_layer};
use crate::scene::color::Color;
use crate::scene::defs::{Def, stop};
use crate::scene::layer::{Layer, Viewport};
use crate::scene::model::{Font, Group, Shape};

/// Hub of both orbits.
pub const CENTER: Point = Point::new(110.0, 100.0);

const INNER_LABELS: [&str; 6] = [
    "\u{94f6}\u{884c}",
    "\u{4fdd}\u{9669}",
    "\u{57fa}\u{91d1}",
    "\u{8bc1}\u{5238}",
    "\u{4fe1}\u{6258}",
    "\u{652f}\u{4ed8}",
];
const HUB_LABEL: &str = "\u{62db}\u{884c}";

fn orbit(angle: f64, radius: f64) -> Point {
    Point::new(
        CENTER.x + angle.cos() * radius,
        CENTER.y + angle.sin() * radius * 0.6,
    )
}

/// Inner node `i` of 6, radius 60, turning +0.01 rad per frame.
pub fn inner_node(frame: FrameIndex, i: usize) -> Point {
    orbit(i as f64 / 6.0 * TAU + 0.01 * frame.as_f64(), 60.0)
}

/// Outer node `i` of 8, radius 95, offset by π/8 and turning -0.008 rad per frame.
pub fn outer_node(frame: FrameIndex, i: usize) -> Point {
    orbit(
        i as f64 / 8.0 * TAU + PI / 8.0 - 0.008 * frame.as_f64(),
        95.0,
    )
}

/// Particle `i` of 3, travelling from the hub to inner node `2i`.
pub fn particle(frame: FrameIndex, i: usize) -> Point {
    let p = travel(frame, 0.02, 0.33 * i as f64);
    lerp_point(CENTER, inner_node(frame, 2 * i), p)
}

pub(crate) fn render(pose: ContentPose, ctx: &LayerCtx<'_>) -> Layer {
    let mut layer = content_layer(Viewport::new(220.0, 200.0, 330.0, 300.0), -110.0, pose);
    let frame = ctx.frame;

    let halo = ctx.id("ecoGlow");
    let soft = ctx.id("nodeGlow");
    layer.def(Def::radial(
        halo.clone(),
        0.5,
        0.5,
        0.5,
        vec![
            stop(0.0, Color::hex(0x60e0ff).with_alpha(0.3)),
            stop(1.0, Color::hex(0x60e0ff).with_alpha(0.0)),
        ],
    ));
    layer.def(Def::blur(soft.clone(), 3.0));

    let inner: Vec<Point> = (0..6).map(|i| inner_node(frame, i)).collect();
    let outer: Vec<Point> = (0..8).map(|i| outer_node(frame, i)).collect();

    layer.push(Shape::ellipse(CENTER, 100.0, 70.0).fill(&halo));
    layer.push(
        Shape::ellipse(CENTER, 60.0, 36.0)
            .stroke(Color::hex(0x40a0d0), 1.0)
            .opacity(0.4),
    );
    layer.push(
        Shape::ellipse(CENTER, 95.0, 57.0)
            .stroke(Color::hex(0x40a0d0), 1.0)
            .opacity(0.3),
    );

    for n in &inner {
        layer.push(
            Shape::line(CENTER, *n)
                .stroke(Color::hex(0x50b8e0), 2.0)
                .opacity(0.5),
        );
    }

    let link = Color::hex(0x40a8d0);
    for (i, n) in inner.iter().enumerate() {
        let next = inner[(i + 1) % inner.len()];
        layer.push(Group::new(vec![
            Shape::line(*n, next).stroke(link, 1.5).opacity(0.4).into(),
            Shape::line(*n, outer[i]).stroke(link, 1.0).opacity(0.3).into(),
        ]));
    }

    let white = Color::WHITE;
    layer.push(
        Group::new(vec![
            Shape::circle(CENTER, 18.0 + 2.0 * osc(frame, 0.1, 0.0))
                .fill(Color::hex(0x40c8f0))
                .into(),
            Shape::circle(CENTER, 10.0)
                .fill(Color::hex(0x70e8ff))
                .into(),
            Shape::text(
                (CENTER.x, CENTER.y + 4.0),
                HUB_LABEL,
                Font::ui(10.0).bold().centered(),
            )
            .fill(white)
            .into(),
        ])
        .filter(&soft),
    );

    for (i, n) in inner.iter().enumerate() {
        let pulse = 1.0 + 0.2 * osc(frame, 0.12, i as f64);
        layer.push(
            Group::new(vec![
                Shape::circle(*n, 10.0 * pulse)
                    .fill(Color::hex(0x50c8f0))
                    .into(),
                Shape::circle(*n, 5.0 * pulse)
                    .fill(Color::hex(0x90f0ff))
                    .into(),
                Shape::text((n.x, n.y + 3.0), INNER_LABELS[i], Font::ui(6.0).centered())
                    .fill(white)
                    .into(),
            ])
            .filter(&soft),
        );
    }

    for (i, n) in outer.iter().enumerate() {
        let pulse = 0.8 + 0.2 * osc(frame, 0.1, 0.8 * i as f64);
        layer.push(Group::new(vec![
            Shape::circle(*n, 6.0 * pulse)
                .fill(Color::hex(0x60d0f0))
                .opacity(0.8)
                .into(),
            Shape::circle(*n, 3.0 * pulse)
                .fill(Color::hex(0xa0f0ff))
                .into(),
        ]));
    }

    for i in 0..3 {
        layer.push(
            Shape::circle(particle(frame, i), 3.0)
                .fill(Color::hex(0x80f8ff))
                .opacity(0.8),
        );
    }

    layer
}

#[cfg(test)]
#[path = "../../tests/unit/layers/network.rs"]
mod tests;
