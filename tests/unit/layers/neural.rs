use super::*;
use crate::scene::resource::ResourceScope;

#[test]
fn first_pulse_starts_at_top_neuron() {
    assert_eq!(pulse(FrameIndex(0), 0), Point::new(110.0, 60.0));
}

#[test]
fn odd_edges_start_half_way() {
    // Edge 1 runs (110,60) -> (140,80); pulse position 0.5 at frame 0.
    let p = pulse(FrameIndex(0), 1);
    assert!((p.x - 125.0).abs() < 1e-9);
    assert!((p.y - 70.0).abs() < 1e-9);
}

#[test]
fn pulses_stay_on_their_edge() {
    for f in (0..3_000).step_by(11) {
        for (i, &(a, b)) in EDGES.iter().enumerate() {
            let p = pulse(FrameIndex(f), i);
            let (a, b) = (neuron(a), neuron(b));
            let min_x = a.x.min(b.x) - 1e-9;
            let max_x = a.x.max(b.x) + 1e-9;
            let min_y = a.y.min(b.y) - 1e-9;
            let max_y = a.y.max(b.y) + 1e-9;
            assert!(p.x >= min_x && p.x <= max_x);
            assert!(p.y >= min_y && p.y <= max_y);
        }
    }
}

#[test]
fn neuron_radius_breathes() {
    assert_eq!(neuron_radius(FrameIndex(0), 0), 8.0);
    for f in 0..200 {
        let r = neuron_radius(FrameIndex(f), 4);
        assert!((8.0 - 1e-9..=12.0 + 1e-9).contains(&r));
    }
}

#[test]
fn topology_is_complete() {
    assert_eq!(NEURONS.len(), 9);
    assert_eq!(EDGES.len(), 14);
    assert!(EDGES.iter().all(|&(a, b)| a < 9 && b < 9 && a != b));
}

#[test]
fn pattern_tile_is_declared() {
    let scope = ResourceScope::new("AIIcon", 0);
    let layer = render(
        ContentPose::default(),
        &LayerCtx::new(&scope, FrameIndex(0)),
    );
    assert!(
        layer
            .defs
            .iter()
            .any(|d| matches!(d, Def::Pattern { width, .. } if *width == 20.0))
    );
    assert_eq!(layer.placement.lift, -115.0);
}
