use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn sweep_matches_rotation_scenarios() {
    let w = Wave::Sweep {
        period: 180,
        step: 2.0,
    };
    assert_eq!(w.sample(FrameIndex(0), fps30()), 0.0);
    assert_eq!(w.sample(FrameIndex(90), fps30()), 180.0);
    assert_eq!(w.sample(FrameIndex(179), fps30()), 358.0);
    assert_eq!(w.sample(FrameIndex(180), fps30()), 0.0);
}

#[test]
fn cycle_is_periodic() {
    let w = Wave::Cycle {
        period: 90,
        delay: 30,
    };
    for f in 0..500 {
        assert_eq!(
            w.sample(FrameIndex(f), fps30()),
            w.sample(FrameIndex(f + 90), fps30())
        );
    }
}

#[test]
fn fill_hold_pins_at_one() {
    let w = Wave::FillHold {
        period: 60,
        fill: 40,
    };
    assert_eq!(w.sample(FrameIndex(0), fps30()), 0.0);
    assert_eq!(w.sample(FrameIndex(20), fps30()), 0.5);
    for f in 40..60 {
        assert_eq!(w.sample(FrameIndex(f), fps30()), 1.0);
    }
    assert_eq!(w.sample(FrameIndex(60), fps30()), 0.0);
}

#[test]
fn blink_has_period_thirty() {
    let w = Wave::Blink { half: 15 };
    assert_eq!(w.sample(FrameIndex(0), fps30()), 1.0);
    assert_eq!(w.sample(FrameIndex(15), fps30()), 0.0);
    for f in 0..300 {
        assert_eq!(
            w.sample(FrameIndex(f), fps30()),
            w.sample(FrameIndex(f + 30), fps30())
        );
    }
}

#[test]
fn sine_stays_within_bounds() {
    let w = Wave::Sine {
        freq_hz: 0.6,
        lo: -15.0,
        hi: 15.0,
    };
    assert_eq!(w.sample(FrameIndex(0), fps30()), 0.0);
    for f in 0..1000 {
        let v = w.sample(FrameIndex(f), fps30());
        assert!((-15.0..=15.0).contains(&v));
    }
}

#[test]
fn zero_periods_stay_total() {
    let w = Wave::Cycle {
        period: 0,
        delay: 0,
    };
    assert_eq!(w.sample(FrameIndex(7), fps30()), 0.0);
    let w = Wave::Blink { half: 0 };
    assert!(w.sample(FrameIndex(7), fps30()).is_finite());
}

#[test]
fn wave_json_uses_tagged_params() {
    let w: Wave = serde_json::from_value(serde_json::json!({
        "kind": "fill_hold",
        "params": { "period": 60, "fill": 40 }
    }))
    .unwrap();
    assert_eq!(
        w,
        Wave::FillHold {
            period: 60,
            fill: 40
        }
    );
}

#[test]
fn travel_wraps() {
    assert!((travel(FrameIndex(50), 0.02, 0.33) - 0.33).abs() < 1e-9);
    assert!(travel(FrameIndex(10_000), 0.03, 0.8) < 1.0);
}

#[test]
fn cycle_wraps_past_the_last_frame_index() {
    let w = Wave::Cycle {
        period: 90,
        delay: 60,
    };
    // (u64::MAX + 60) mod 90, computed without wrapping: u64::MAX mod 90 = 15.
    assert_eq!(w.at(FrameIndex(u64::MAX)), 75.0 / 90.0);
    assert_eq!(w.at(FrameIndex(1 << 63)), w.at(FrameIndex((1 << 63) % 90)));
}

#[test]
fn at_counts_time_in_frames() {
    let w = Wave::Blink { half: 15 };
    assert_eq!(w.at(FrameIndex(14)), 1.0);
    assert_eq!(w.at(FrameIndex(15)), 0.0);
    let s = Wave::Sine {
        freq_hz: 0.25,
        lo: -1.0,
        hi: 1.0,
    };
    assert!((s.at(FrameIndex(1)) - 1.0).abs() < 1e-12);
}
