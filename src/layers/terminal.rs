use crate::animation::wave::{Wave, osc};
use crate::foundation::core::{FrameIndex, Point};
use crate::layers::{ContentPose, LayerCtx, content_layer, light};
use crate::scene::color::Color;
use crate::scene::defs::{Def, FilterRegion, stop};
use crate::scene::layer::{Layer, Viewport};
use crate::scene::model::{Font, Group, Node, Shape, polyline};

/// Level of detail of the monitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalStyle {
    /// 300x270 display, lifted 130 px.
    #[default]
    Standard,
    /// 200x180 display, lifted 95 px, with reflection, foot outline and an edge glow.
    Detailed,
}

/// Loading bar fill: ramps over 40 frames, holds for 20.
const PROGRESS: Wave = Wave::FillHold {
    period: 60,
    fill: 40,
};

/// Cursor block: 15 frames on, 15 off.
const CURSOR: Wave = Wave::Blink { half: 15 };

/// Width of the loading bar in px.
pub fn progress_width(frame: FrameIndex) -> f64 {
    100.0 * PROGRESS.at(frame)
}

/// Whether the cursor block is drawn.
pub fn cursor_visible(frame: FrameIndex) -> bool {
    CURSOR.at(frame) > 0.5
}

const GREEN: u32 = 0x50e890;
const CYAN: u32 = 0x60c8f0;

pub(crate) fn render(style: TerminalStyle, pose: ContentPose, ctx: &LayerCtx<'_>) -> Layer {
    let detailed = style == TerminalStyle::Detailed;
    let mut layer = if detailed {
        content_layer(Viewport::new(200.0, 180.0, 200.0, 180.0), -95.0, pose)
    } else {
        content_layer(Viewport::new(200.0, 180.0, 300.0, 270.0), -130.0, pose)
    };

    let body = ctx.id("macBody");
    let screen = ctx.id("macScreen");
    let stand = ctx.id("stand");
    let reflection = ctx.id("screenReflection");
    let shadow = ctx.id("macShadow");
    let glow = ctx.id("screenGlow");

    layer.def(Def::vertical(
        body.clone(),
        vec![
            stop(0.0, Color::hex(0xe8f0f5)),
            stop(0.15, Color::hex(0xd0dce5)),
            stop(0.85, Color::hex(0xb8c8d5)),
            stop(1.0, Color::hex(0xa8b8c5)),
        ],
    ));
    layer.def(Def::vertical(
        screen.clone(),
        vec![stop(0.0, Color::hex(0x1a2a35)), stop(1.0, Color::hex(0x0a1520))],
    ));
    layer.def(Def::horizontal(
        stand.clone(),
        vec![
            stop(0.0, Color::hex(0xb0c0cc)),
            stop(0.5, Color::hex(0xd8e4ec)),
            stop(1.0, Color::hex(0xb0c0cc)),
        ],
    ));
    if detailed {
        layer.def(Def::vertical(
            reflection.clone(),
            vec![
                stop(0.0, Color::WHITE.with_alpha(0.1)),
                stop(0.3, Color::WHITE.with_alpha(0.0)),
            ],
        ));
    }
    layer.def(Def::drop_shadow(
        shadow.clone(),
        8.0,
        12.0,
        Color::hex(0x1a3050).with_alpha(0.35),
    ));
    layer.def(Def::glow(glow.clone(), FilterRegion::WIDE, 1.0));

    layer.push(
        Shape::rect(10.0, 5.0, 180.0, 120.0)
            .rounded(8.0)
            .fill(&body)
            .filter(&shadow),
    );
    layer.push(
        Shape::rect(18.0, 12.0, 164.0, 98.0)
            .rounded(4.0)
            .fill(Color::hex(0x0a0a0a)),
    );
    layer.push(
        Shape::rect(22.0, 16.0, 156.0, 90.0)
            .rounded(2.0)
            .fill(&screen),
    );
    if detailed {
        layer.push(
            Shape::rect(22.0, 16.0, 156.0, 90.0)
                .rounded(2.0)
                .fill(&reflection),
        );
    }

    layer.push(Group::new(screen_content(ctx.frame)).filter(&glow));

    layer.push(Shape::rect(10.0, 110.0, 180.0, 15.0).fill(&body));
    layer.push(
        Shape::ellipse((100.0, 118.0), 6.0, 4.0)
            .fill(Color::hex(0xa8b8c5))
            .opacity(0.6),
    );
    layer.push(
        Shape::path(polyline(&[
            Point::new(85.0, 125.0),
            Point::new(85.0, 145.0),
            Point::new(75.0, 155.0),
            Point::new(125.0, 155.0),
            Point::new(115.0, 145.0),
            Point::new(115.0, 125.0),
        ]))
        .fill(&stand),
    );
    layer.push(Shape::ellipse((100.0, 158.0), 40.0, 8.0).fill(&stand));
    if detailed {
        layer.push(
            Shape::ellipse((100.0, 158.0), 40.0, 8.0).stroke(Color::rgba(255, 255, 255, 0.3), 1.0),
        );
    }

    layer.push(light((170.0, 15.0), 2.5, 0x70e0ff, 0.6, (0.12, 0.0), ctx.frame));
    layer.push(light((178.0, 22.0), 1.5, 0x50c8f0, 0.5, (0.15, 1.0), ctx.frame));
    if detailed {
        layer.push(light((165.0, 20.0), 1.0, 0x60d8ff, 0.4, (0.1, 2.0), ctx.frame));
        layer.push(
            Shape::rect(22.0, 16.0, 156.0, 90.0)
                .rounded(2.0)
                .stroke(Color::hex(0x40a0d0), 0.5)
                .opacity(0.3 + 0.2 * osc(ctx.frame, 0.06, 0.0)),
        );
    }

    layer
}

/// Menu bar, command output, loading bar and cursor.
fn screen_content(frame: FrameIndex) -> Vec<Node> {
    let mut nodes: Vec<Node> = vec![
        Shape::rect(22.0, 16.0, 156.0, 12.0)
            .fill(Color::rgba(40, 60, 80, 0.9))
            .into(),
        Shape::circle((30.0, 22.0), 3.0)
            .fill(Color::hex(0xff5f57))
            .into(),
        Shape::circle((40.0, 22.0), 3.0)
            .fill(Color::hex(0xfebc2e))
            .into(),
        Shape::circle((50.0, 22.0), 3.0)
            .fill(Color::hex(0x28c840))
            .into(),
        Shape::text((100.0, 25.0), "Terminal \u{2014} zsh", Font::ui(6.0).centered())
            .fill(Color::hex(0x90a0b0))
            .into(),
        Shape::text((28.0, 42.0), "$ ./deploy --online", Font::mono(8.0))
            .fill(Color::hex(GREEN))
            .into(),
        Shape::rect(28.0, 50.0, progress_width(frame), 2.0)
            .rounded(1.0)
            .fill(Color::hex(0x40d080))
            .opacity(0.8)
            .into(),
        Shape::text((28.0, 62.0), "\u{2713} Connected to cloud", Font::mono(7.0))
            .fill(Color::hex(CYAN))
            .into(),
        Shape::text((28.0, 74.0), "\u{2713} Services online", Font::mono(7.0))
            .fill(Color::hex(CYAN))
            .into(),
        Shape::text((28.0, 86.0), "\u{2192} Syncing data...", Font::mono(7.0))
            .fill(Color::hex(0xf0c040))
            .into(),
    ];
    if cursor_visible(frame) {
        nodes.push(
            Shape::rect(28.0, 92.0, 5.0, 10.0)
                .fill(Color::hex(GREEN))
                .into(),
        );
    }
    nodes
}

#[cfg(test)]
#[path = "../../tests/unit/layers/terminal.rs"]
mod tests;
