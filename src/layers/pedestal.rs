use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::animation::wave::{Wave, osc};
use crate::foundation::core::{BezPath, FrameIndex, Point, Vec2};
use crate::layers::{LayerCtx, light};
use crate::scene::color::Color;
use crate::scene::defs::{Def, FilterRegion, stop};
use crate::scene::layer::{Layer, Placement, Viewport};
use crate::scene::model::{Shape, arc_to};

/// Visual variant of the cylindrical pedestal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PedestalStyle {
    /// Shown at 750x500 with four specular points orbiting the cap.
    #[default]
    Spinning,
    /// Shown at 600x400 with a fixed highlight and four twinkling lights.
    Twinkle,
}

/// Animated inputs of the pedestal.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PedestalPose {
    /// Spin angle in degrees (drives the specular highlights).
    pub rotation_deg: f64,
    /// Vertical offset of the whole pedestal in pixels.
    pub y_offset: f64,
    /// Glow intensity in `[0, 1]`.
    pub glow: f64,
}

const CENTER_X: f64 = 300.0;
const RING_CENTER: (f64, f64) = (300.0, 320.0);

const SPECULAR_PHASE: [f64; 4] = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
const SPECULAR_RADIUS: [f64; 4] = [120.0, 100.0, 110.0, 90.0];
const SPECULAR_Y: [f64; 4] = [190.0, 195.0, 188.0, 192.0];
const SPECULAR_R: [f64; 4] = [3.0, 2.5, 2.0, 1.5];
const SPECULAR_COLOR: [u32; 4] = [0x90e8ff, 0x70d8f8, 0x80e0ff, 0x60d0f0];
const SPECULAR_BRIGHT: [f64; 4] = [0.7, 0.6, 0.5, 0.5];
const SPECULAR_DIM: [f64; 4] = [0.2, 0.15, 0.1, 0.1];

/// `(center, r, color, base, (rate, phase))` of the twinkle lights.
const TWINKLES: [((f64, f64), f64, u32, f64, (f64, f64)); 4] = [
    ((180.0, 190.0), 3.0, 0x90e8ff, 0.5, (0.15, 0.0)),
    ((200.0, 180.0), 2.0, 0x70d8f8, 0.4, (0.12, 1.0)),
    ((400.0, 195.0), 2.5, 0x80e0ff, 0.5, (0.1, 2.0)),
    ((420.0, 185.0), 1.5, 0x60d0f0, 0.4, (0.14, 3.0)),
];

/// Progress of glow ring `i` in `[0, 1)`. Rings restart every 90 frames, 30 frames apart.
pub fn ring_progress(frame: FrameIndex, i: u64) -> f64 {
    Wave::Cycle {
        period: 90,
        delay: 30 * i,
    }
    .at(frame)
}

/// Horizontal position and opacity of specular highlight `k` at spin `spin` radians.
///
/// Points on the visible (front) half of the rim are bright, the others dim.
pub fn specular(spin: f64, k: usize) -> (f64, f64) {
    let c = (spin + SPECULAR_PHASE[k]).cos();
    let opacity = if c > 0.0 {
        SPECULAR_BRIGHT[k]
    } else {
        SPECULAR_DIM[k]
    };
    (CENTER_X + c * SPECULAR_RADIUS[k], opacity)
}

/// Render the pedestal layer.
pub fn render_pedestal(style: PedestalStyle, pose: PedestalPose, ctx: &LayerCtx<'_>) -> Layer {
    let (viewport, placement) = match style {
        PedestalStyle::Spinning => (
            Viewport::new(600.0, 400.0, 750.0, 500.0),
            Placement::default(),
        ),
        PedestalStyle::Twinkle => (
            Viewport::new(600.0, 400.0, 600.0, 400.0),
            Placement {
                y_offset: pose.y_offset,
                ..Placement::default()
            },
        ),
    };
    let mut layer = Layer::new("pedestal", viewport, placement);

    let body = ctx.id("cylinderBody");
    let top = ctx.id("cylinderTop");
    let bowl = ctx.id("innerBowl");
    let plate = ctx.id("basePlate");
    let ring = ctx.id("glowRing");
    let band = ctx.id("whiteBand");
    let shadow = ctx.id("shadow");
    let glow = ctx.id("techGlow");

    layer.def(Def::horizontal(
        body.clone(),
        vec![
            stop(0.0, Color::hex(0x3a7090)),
            stop(0.2, Color::hex(0x5a9fc8)),
            stop(0.5, Color::hex(0x7cc5e8)),
            stop(0.8, Color::hex(0x5a9fc8)),
            stop(1.0, Color::hex(0x3a7090)),
        ],
    ));
    layer.def(Def::radial(
        top.clone(),
        0.5,
        0.5,
        0.7,
        vec![
            stop(0.0, Color::hex(0x90d8f5)),
            stop(0.4, Color::hex(0x6ac0e8)),
            stop(0.7, Color::hex(0x4aa8d8)),
            stop(1.0, Color::hex(0x3a90c0)),
        ],
    ));
    layer.def(Def::radial(
        bowl.clone(),
        0.5,
        0.3,
        0.6,
        vec![
            stop(0.0, Color::hex(0x4a90b0)),
            stop(0.5, Color::hex(0x3a7898)),
            stop(1.0, Color::hex(0x2a6080)),
        ],
    ));
    layer.def(Def::horizontal(
        plate.clone(),
        vec![
            stop(0.0, Color::hex(0x6ab0d5).with_alpha(0.3)),
            stop(0.5, Color::hex(0xa0d8f5).with_alpha(0.5)),
            stop(1.0, Color::hex(0x6ab0d5).with_alpha(0.3)),
        ],
    ));
    layer.def(Def::horizontal(
        ring.clone(),
        vec![
            stop(0.0, Color::hex(0x40c0f0).with_alpha(0.0)),
            stop(0.5, Color::hex(0x60e0ff)),
            stop(1.0, Color::hex(0x40c0f0).with_alpha(0.0)),
        ],
    ));
    layer.def(Def::horizontal(
        band.clone(),
        vec![
            stop(0.0, Color::hex(0xc8e8f8).with_alpha(0.6)),
            stop(0.3, Color::WHITE.with_alpha(0.95)),
            stop(0.7, Color::WHITE.with_alpha(0.95)),
            stop(1.0, Color::hex(0xc8e8f8).with_alpha(0.6)),
        ],
    ));
    layer.def(Def::radial(
        shadow.clone(),
        0.5,
        0.5,
        0.5,
        vec![
            stop(0.0, Color::hex(0x205070).with_alpha(0.4)),
            stop(1.0, Color::hex(0x205070).with_alpha(0.0)),
        ],
    ));
    layer.def(Def::glow(glow.clone(), FilterRegion::WIDE, 4.0));

    layer.push(Shape::ellipse((300.0, 350.0), 250.0, 35.0).fill(&shadow));

    for i in 0..3 {
        let p = ring_progress(ctx.frame, i);
        let scale = 0.5 + 0.8 * p;
        layer.push(
            Shape::ellipse(RING_CENTER, 200.0 * scale, 35.0 * scale)
                .stroke(&ring, 2.0)
                .opacity(0.4 * (1.0 - p)),
        );
    }

    layer.push(Shape::ellipse(RING_CENTER, 240.0, 40.0).fill(&plate));
    layer.push(
        Shape::ellipse(RING_CENTER, 240.0, 40.0)
            .stroke(Color::hex(0x50b8e0), 2.0)
            .opacity(0.3 + pose.glow),
    );

    layer.extend(particles(ctx));

    layer.push(
        Shape::path(drum(100.0, 500.0, 280.0, 200.0, Vec2::new(200.0, 55.0))).fill(&body),
    );
    layer.push(
        Shape::path(drum(110.0, 490.0, 275.0, 255.0, Vec2::new(190.0, 50.0))).fill(&band),
    );
    layer.push(
        Shape::ellipse((300.0, 280.0), 200.0, 55.0)
            .stroke(Color::hex(0x40b0e0), 2.0)
            .opacity(pose.glow)
            .filter(&glow),
    );

    layer.push(Shape::ellipse((300.0, 200.0), 200.0, 55.0).fill(&top));
    layer.push(Shape::ellipse((300.0, 195.0), 170.0, 45.0).fill(&bowl));
    layer.push(Shape::ellipse((300.0, 190.0), 140.0, 35.0).fill(Color::hex(0x3a7898)));
    layer.push(Shape::ellipse((300.0, 188.0), 120.0, 28.0).fill(Color::hex(0x2a6585)));

    layer.push(
        Shape::ellipse((300.0, 200.0), 200.0, 55.0)
            .stroke(Color::hex(0x70d0f8), 1.5)
            .opacity(0.5 + 0.5 * pose.glow),
    );
    layer.push(Shape::ellipse((300.0, 185.0), 60.0, 8.0).fill(Color::rgba(80, 160, 200, 0.5)));

    let highlight = Color::rgba(255, 255, 255, 0.25);
    match style {
        PedestalStyle::Spinning => {
            let spin = pose.rotation_deg.to_radians();
            for k in 0..4 {
                let (x, opacity) = specular(spin, k);
                layer.push(
                    Shape::circle((x, SPECULAR_Y[k]), SPECULAR_R[k])
                        .fill(Color::hex(SPECULAR_COLOR[k]))
                        .opacity(opacity),
                );
            }
            layer.push(
                Shape::ellipse((200.0 + 60.0 * spin.cos(), 175.0), 60.0, 12.0).fill(highlight),
            );
        }
        PedestalStyle::Twinkle => {
            layer.push(Shape::ellipse((260.0, 175.0), 60.0, 12.0).fill(highlight));
            for (center, r, color, base, wave) in TWINKLES {
                layer.push(light(center, r, color, base, wave, ctx.frame));
            }
        }
    }

    layer
}

/// Eight particles drifting around the rim on a flattened orbit.
fn particles(ctx: &LayerCtx<'_>) -> Vec<Shape> {
    let f = ctx.f();
    (0..8)
        .map(|i| {
            let i = f64::from(i);
            let angle = i / 8.0 * TAU + 0.02 * f;
            let radius = 180.0 + 20.0 * osc(ctx.frame, 0.05, i);
            let x = CENTER_X + angle.cos() * radius;
            let y = 200.0 + angle.sin() * radius * 0.3;
            Shape::circle((x, y), 2.0 + osc(ctx.frame, 0.1, 2.0 * i))
                .fill(Color::hex(0x7dd8f8))
                .opacity(0.4 + 0.3 * osc(ctx.frame, 0.08, i))
        })
        .collect()
}

/// Side band of a cylinder: left edge up, arc over the top, right edge down, arc under the bottom.
fn drum(left: f64, right: f64, bottom: f64, top: f64, radii: Vec2) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((left, bottom));
    p.line_to((left, top));
    arc_to(
        &mut p,
        Point::new(left, top),
        Point::new(right, top),
        radii,
        false,
        true,
    );
    p.line_to((right, bottom));
    arc_to(
        &mut p,
        Point::new(right, bottom),
        Point::new(left, bottom),
        radii,
        false,
        true,
    );
    p
}

#[cfg(test)]
#[path = "../../tests/unit/layers/pedestal.rs"]
mod tests;
