use super::*;
use crate::scene::model::Node;
use crate::scene::resource::ResourceScope;

#[test]
fn inner_ring_starts_on_the_right() {
    let n = inner_node(FrameIndex(0), 0);
    assert_eq!(n, Point::new(170.0, 100.0));
}

#[test]
fn orbits_counter_rotate() {
    let a0 = inner_node(FrameIndex(0), 1);
    let a1 = inner_node(FrameIndex(10), 1);
    let b0 = outer_node(FrameIndex(0), 1);
    let b1 = outer_node(FrameIndex(10), 1);
    let angle = |p: Point| ((p.y - CENTER.y) / 0.6).atan2(p.x - CENTER.x);
    assert!((angle(a1) - angle(a0) - 0.1).abs() < 1e-9);
    assert!((angle(b1) - angle(b0) + 0.08).abs() < 1e-9);
}

#[test]
fn nodes_sit_on_squashed_ellipses() {
    for f in [0u64, 57, 900] {
        for i in 0..6 {
            let p = inner_node(FrameIndex(f), i) - CENTER;
            assert!(((p.x / 60.0).powi(2) + (p.y / 36.0).powi(2) - 1.0).abs() < 1e-9);
        }
        for i in 0..8 {
            let p = outer_node(FrameIndex(f), i) - CENTER;
            assert!(((p.x / 95.0).powi(2) + (p.y / 57.0).powi(2) - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn particles_leave_from_the_hub() {
    assert_eq!(particle(FrameIndex(0), 0), CENTER);
    let target = inner_node(FrameIndex(0), 2);
    let p = particle(FrameIndex(0), 1);
    let expected = CENTER.lerp(target, 0.33);
    assert!((p - expected).hypot() < 1e-9);
}

#[test]
fn layer_structure() {
    let scope = ResourceScope::new("EcosystemIcon", 0);
    let layer = render(
        ContentPose::default(),
        &LayerCtx::new(&scope, FrameIndex(42)),
    );
    let groups = layer
        .nodes
        .iter()
        .filter(|n| matches!(n, Node::Group(_)))
        .count();
    // 6 link pairs, hub, 6 inner nodes, 8 outer nodes
    assert_eq!(groups, 6 + 1 + 6 + 8);
    assert_eq!(layer.defs.len(), 2);
}
