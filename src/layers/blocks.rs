use std::f64::consts::TAU;

use crate::animation::wave::{osc, travel};
use crate::foundation::core::{Affine, FrameIndex, Point};
use crate::foundation::math::lerp_point;
use crate::layers::{ContentPose, LayerCtx, content_layer};
use crate::scene::color::Color;
use crate::scene::layer::{Layer, Viewport};
use crate::scene::model::{Font, Group, Shape, polygon};

/// `(x, y, label)` of each block.
pub const BLOCKS: [(f64, f64, &str); 5] = [
    (110.0, 50.0, "API"),
    (60.0, 90.0, "\u{652f}\u{4ed8}"),
    (160.0, 90.0, "\u{8d26}\u{6237}"),
    (85.0, 140.0, "\u{98ce}\u{63a7}"),
    (135.0, 140.0, "\u{6570}\u{636e}"),
];

/// Block index pairs joined by a connection.
pub const CONNECTIONS: [(usize, usize); 6] = [(0, 1), (0, 2), (1, 3), (2, 4), (1, 4), (2, 3)];

const ORBIT_CENTER: Point = Point::new(110.0, 100.0);
const ORBIT_RX: f64 = 90.0;
const ORBIT_RY: f64 = 70.0;

fn anchor(i: usize) -> Point {
    Point::new(BLOCKS[i].0, BLOCKS[i].1)
}

/// Vertical center of block `i` after its bob.
pub fn block_y(frame: FrameIndex, i: usize) -> f64 {
    BLOCKS[i].1 + 3.0 * osc(frame, 0.08, i as f64)
}

/// Data dot on connection `i`. Connections join the blocks' resting positions.
pub fn connection_dot(frame: FrameIndex, i: usize) -> Point {
    let (a, b) = CONNECTIONS[i];
    lerp_point(anchor(a), anchor(b), travel(frame, 0.03, 0.2 * i as f64))
}

/// Orbit rotation in degrees.
pub fn orbit_deg(frame: FrameIndex) -> f64 {
    0.5 * frame.as_f64()
}

/// Marker `i` of 3, spaced a third of a turn apart on the orbit.
pub fn marker(frame: FrameIndex, i: usize) -> Point {
    let a = orbit_deg(frame).to_radians() + i as f64 * TAU / 3.0;
    Point::new(
        ORBIT_CENTER.x + a.cos() * ORBIT_RX,
        ORBIT_CENTER.y + a.sin() * ORBIT_RY,
    )
}

pub(crate) fn render(pose: ContentPose, ctx: &LayerCtx<'_>) -> Layer {
    let mut layer = content_layer(Viewport::new(220.0, 200.0, 330.0, 300.0), -110.0, pose);
    let frame = ctx.frame;

    for (i, &(a, b)) in CONNECTIONS.iter().enumerate() {
        layer.push(Group::new(vec![
            Shape::line(anchor(a), anchor(b))
                .stroke(Color::hex(0x40b0e0), 3.0)
                .opacity(0.6)
                .into(),
            Shape::circle(connection_dot(frame, i), 4.0)
                .fill(Color::hex(0x80f0ff))
                .into(),
        ]));
    }

    for (i, &(x, _, label)) in BLOCKS.iter().enumerate() {
        let y = block_y(frame, i);
        let p = |dx: f64, dy: f64| Point::new(x + dx, y + dy);
        layer.push(Group::new(vec![
            Shape::path(polygon(&[p(0.0, -12.0), p(20.0, 0.0), p(0.0, 12.0), p(-20.0, 0.0)]))
                .fill(Color::hex(0x50c8f0))
                .into(),
            Shape::path(polygon(&[p(-20.0, 0.0), p(0.0, 12.0), p(0.0, 25.0), p(-20.0, 13.0)]))
                .fill(Color::hex(0x3090b0))
                .into(),
            Shape::path(polygon(&[p(20.0, 0.0), p(0.0, 12.0), p(0.0, 25.0), p(20.0, 13.0)]))
                .fill(Color::hex(0x2080a0))
                .into(),
            Shape::text((x, y + 4.0), label, Font::ui(9.0).bold().centered())
                .fill(Color::WHITE)
                .into(),
        ]));
    }

    layer.push(
        Group::new(vec![
            Shape::ellipse(ORBIT_CENTER, ORBIT_RX, ORBIT_RY)
                .stroke(Color::hex(0x50c8e0), 1.0)
                .opacity(0.3)
                .dashed(&[5.0, 5.0])
                .into(),
        ])
        .transform(Affine::rotate_about(
            orbit_deg(frame).to_radians(),
            ORBIT_CENTER,
        )),
    );
    for i in 0..3 {
        layer.push(
            Shape::circle(marker(frame, i), 4.0)
                .fill(Color::hex(0x70e0ff))
                .opacity(0.7),
        );
    }

    layer
}

#[cfg(test)]
#[path = "../../tests/unit/layers/blocks.rs"]
mod tests;
