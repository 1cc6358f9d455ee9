use super::*;
use kurbo::{PathEl, Shape as _};

#[test]
fn opacity_is_clamped() {
    assert_eq!(Shape::circle((0.0, 0.0), 1.0).opacity(1.7).style.opacity, 1.0);
    assert_eq!(Shape::circle((0.0, 0.0), 1.0).opacity(-0.2).style.opacity, 0.0);
}

#[test]
fn dash_and_cap_apply_to_existing_stroke_only() {
    let s = Shape::line((0.0, 0.0), (10.0, 0.0)).dashed(&[4.0, 4.0]);
    assert!(s.style.stroke.is_none());

    let s = Shape::line((0.0, 0.0), (10.0, 0.0))
        .stroke(Color::hex(0x40b0e0), 2.0)
        .dashed(&[4.0, 4.0])
        .round_cap();
    let stroke = s.style.stroke.unwrap();
    assert_eq!(stroke.dash, vec![4.0, 4.0]);
    assert_eq!(stroke.cap, LineCap::Round);
}

#[test]
fn half_ellipse_arc_ends_at_target() {
    let mut p = BezPath::new();
    p.move_to((100.0, 200.0));
    arc_to(
        &mut p,
        Point::new(100.0, 200.0),
        Point::new(500.0, 200.0),
        Vec2::new(200.0, 55.0),
        false,
        true,
    );
    let last = match p.elements().last() {
        Some(PathEl::CurveTo(_, _, end)) => *end,
        other => panic!("expected curve, got {other:?}"),
    };
    assert!((last.x - 500.0).abs() < 1e-6);
    assert!((last.y - 200.0).abs() < 1e-6);

    // sweep=1 from left to right goes over the top (negative y).
    let bbox = p.bounding_box();
    assert!((bbox.min_y() - 145.0).abs() < 0.5);
}

#[test]
fn degenerate_arc_is_a_line() {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    arc_to(
        &mut p,
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Vec2::new(0.0, 0.0),
        false,
        true,
    );
    assert_eq!(p.elements().last(), Some(&PathEl::LineTo(Point::new(10.0, 0.0))));
}

#[test]
fn polygon_closes() {
    let p = polygon(&[
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
    ]);
    assert_eq!(p.elements().last(), Some(&PathEl::ClosePath));
    assert_eq!(polyline(&[Point::new(0.0, 0.0)]).elements().len(), 1);
}
