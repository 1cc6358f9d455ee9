use crate::animation::wave::osc;
use crate::foundation::core::{BezPath, FrameIndex, Point};
use crate::layers::{ContentPose, LayerCtx, content_layer, light};
use crate::scene::color::Color;
use crate::scene::defs::{Def, FilterRegion, stop};
use crate::scene::layer::{Layer, Viewport};
use crate::scene::model::{Group, Shape, polyline};

struct Bar {
    x: f64,
    base: f64,
    phase: f64,
    color: u32,
}

const BARS: [Bar; 5] = [
    Bar {
        x: 45.0,
        base: 60.0,
        phase: 0.0,
        color: 0x40a8e0,
    },
    Bar {
        x: 75.0,
        base: 80.0,
        phase: 0.5,
        color: 0x50c8f0,
    },
    Bar {
        x: 105.0,
        base: 50.0,
        phase: 1.0,
        color: 0x60d8ff,
    },
    Bar {
        x: 135.0,
        base: 90.0,
        phase: 1.5,
        color: 0x50c8f0,
    },
    Bar {
        x: 165.0,
        base: 70.0,
        phase: 2.0,
        color: 0x40a8e0,
    },
];

/// Baseline every bar grows up from.
const BASELINE: f64 = 130.0;

/// Height and top edge of bar `i`.
pub fn bar_extent(frame: FrameIndex, i: usize) -> (f64, f64) {
    let bar = &BARS[i];
    let height = bar.base + 15.0 * osc(frame, 0.08, bar.phase);
    (height, BASELINE - height)
}

/// Center and opacity of rising particle `i`. Particles only show between the grid bounds.
pub fn particle(frame: FrameIndex, i: u64) -> (Point, f64) {
    let y = BASELINE - (((frame.0 % 50) * 2 + 30 * (i % 10)) % 100) as f64;
    let x = 55.0 + 30.0 * i as f64;
    let opacity = if y > 30.0 && y < 120.0 { 0.6 } else { 0.0 };
    (Point::new(x, y), opacity)
}

pub(crate) fn render(pose: ContentPose, ctx: &LayerCtx<'_>) -> Layer {
    let mut layer = content_layer(Viewport::new(220.0, 180.0, 330.0, 270.0), -120.0, pose);

    let card = ctx.id("chartBg");
    let shadow = ctx.id("chartShadow");
    let glow = ctx.id("barGlow");
    layer.def(Def::diagonal(
        card.clone(),
        vec![
            stop(0.0, Color::hex(0xcee8f5).with_alpha(0.95)),
            stop(1.0, Color::hex(0xa5d2e2).with_alpha(0.9)),
        ],
    ));
    layer.def(Def::drop_shadow(
        shadow.clone(),
        6.0,
        10.0,
        Color::hex(0x1a3050).with_alpha(0.3),
    ));
    layer.def(Def::glow(glow.clone(), FilterRegion::WIDE, 2.0));

    layer.push(
        Shape::rect(15.0, 10.0, 190.0, 140.0)
            .rounded(16.0)
            .fill(&card)
            .filter(&shadow),
    );
    layer.push(
        Shape::rect(18.0, 13.0, 184.0, 134.0)
            .rounded(14.0)
            .stroke(Color::rgba(255, 255, 255, 0.6), 2.0),
    );

    for i in 0..4 {
        let y = 40.0 + 25.0 * f64::from(i);
        layer.push(
            Shape::line((35.0, y), (185.0, y))
                .stroke(Color::rgba(100, 160, 200, 0.3), 1.0)
                .dashed(&[4.0, 4.0]),
        );
    }

    for (i, bar) in BARS.iter().enumerate() {
        let (height, top) = bar_extent(ctx.frame, i);
        layer.push(
            Group::new(vec![
                Shape::rect(bar.x, top, 20.0, height)
                    .rounded(4.0)
                    .fill(Color::hex(bar.color))
                    .opacity(0.9)
                    .into(),
                Shape::rect(bar.x + 2.0, top, 16.0, 6.0)
                    .rounded(3.0)
                    .fill(Color::rgba(255, 255, 255, 0.4))
                    .into(),
            ])
            .filter(&glow),
        );
    }

    for i in 0..5 {
        let (c, opacity) = particle(ctx.frame, i);
        layer.push(
            Shape::circle(c, 2.0)
                .fill(Color::hex(0x90f0ff))
                .opacity(opacity),
        );
    }

    layer.push(
        Shape::path(trend_line())
            .stroke(Color::hex(0xf0c040), 2.0)
            .round_cap()
            .opacity(0.8),
    );

    layer.push(light((185.0, 20.0), 2.5, 0x70e0ff, 0.6, (0.1, 0.0), ctx.frame));
    layer.push(light((193.0, 28.0), 1.5, 0x50c8f0, 0.5, (0.12, 1.0), ctx.frame));

    layer.push(
        Shape::path(polyline(&[
            Point::new(95.0, 150.0),
            Point::new(95.0, 160.0),
            Point::new(85.0, 168.0),
            Point::new(135.0, 168.0),
            Point::new(125.0, 160.0),
            Point::new(125.0, 150.0),
        ]))
        .fill(&card),
    );
    layer.push(Shape::ellipse((110.0, 170.0), 35.0, 6.0).fill(&card));

    layer
}

/// Two joined quadratics; the second control point mirrors the first about the joint.
fn trend_line() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((55.0, 90.0));
    p.quad_to((85.0, 60.0), (115.0, 80.0));
    p.quad_to((145.0, 100.0), (175.0, 50.0));
    p
}

#[cfg(test)]
#[path = "../../tests/unit/layers/chart.rs"]
mod tests;
