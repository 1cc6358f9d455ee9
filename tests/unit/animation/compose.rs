use super::*;
use crate::foundation::core::{Canvas, Fps};

fn cfg() -> VideoConfig {
    VideoConfig::new(
        Fps::new(30, 1).unwrap(),
        180,
        Canvas {
            width: 800,
            height: 800,
        },
    )
    .unwrap()
}

#[test]
fn rotation_sweep_scenarios() {
    let c = cfg();
    assert_eq!(compose(FrameIndex(0), &c).base_rotation, 0.0);
    assert_eq!(compose(FrameIndex(90), &c).base_rotation, 180.0);
    assert_eq!(compose(FrameIndex(179), &c).base_rotation, 358.0);
    assert_eq!(compose(FrameIndex(180), &c).base_rotation, 0.0);
}

#[test]
fn frame_zero_is_at_rest() {
    let d = compose(FrameIndex(0), &cfg());
    assert!(d.card_rotation.abs() < 1e-12);
    assert!(d.ring_y_offset.abs() < 1e-12);
    assert!(d.card_y_offset.abs() < 1e-12);
    assert!((d.glow_intensity - 0.3).abs() < 1e-12);
}

#[test]
fn card_follows_bob() {
    let c = cfg();
    for f in [7u64, 13, 25, 101, 4_000] {
        let d = compose(FrameIndex(f), &c);
        assert!((d.card_y_offset - 0.7 * d.ring_y_offset).abs() < 1e-12);
    }
}

#[test]
fn scalars_stay_in_range_far_past_duration() {
    let c = cfg();
    for f in (0..=10_000u64).step_by(37) {
        let d = compose(FrameIndex(f), &c);
        assert!((0.0..360.0).contains(&d.base_rotation));
        assert!(d.card_rotation.abs() <= 8.0 + 1e-9);
        assert!(d.ring_y_offset.abs() <= 15.0 + 1e-9);
        assert!((0.15 - 1e-9..=0.45 + 1e-9).contains(&d.glow_intensity));
    }
}

#[test]
fn tilt_peaks_a_quarter_period_in() {
    // 0.3 Hz at 30 fps: the crest is at 25 frames.
    let d = compose(FrameIndex(25), &cfg());
    assert!((d.card_rotation - 8.0).abs() < 1e-9);
}
