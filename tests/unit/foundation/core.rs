use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.iter().collect::<Vec<_>>().len() as u64, r.len_frames());
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn frame_from_f64_rejects_bad_host_values() {
    assert_eq!(FrameIndex::from_f64(12.0).unwrap(), FrameIndex(12));
    assert!(FrameIndex::from_f64(-1.0).is_err());
    assert!(FrameIndex::from_f64(f64::NAN).is_err());
    assert!(FrameIndex::from_f64(f64::INFINITY).is_err());
    assert!(FrameIndex::from_f64(1.5).is_err());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(30, 1).unwrap();
    assert!((fps.frames_to_secs(45) - 1.5).abs() < 1e-12);
}

#[test]
fn video_config_validates_and_exposes_range() {
    let fps = Fps::new(30, 1).unwrap();
    let canvas = Canvas {
        width: 800,
        height: 800,
    };
    assert!(VideoConfig::new(fps, 0, canvas).is_err());
    assert!(
        VideoConfig::new(
            fps,
            10,
            Canvas {
                width: 0,
                height: 1
            }
        )
        .is_err()
    );

    let cfg = VideoConfig::new(fps, 180, canvas).unwrap();
    assert_eq!(cfg.full_range().len_frames(), 180);
    assert_eq!(canvas.center(), Point::new(400.0, 400.0));
}
