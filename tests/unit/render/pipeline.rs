use super::*;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::core::{Canvas, Fps, VideoConfig};
use crate::registry::Registry;
use crate::registry::icon::Icon;

/// Writes the frame index into a 1x1 pixel so ordering is observable without rasterizing.
#[derive(Default)]
struct Stamp {
    calls: AtomicU64,
}

impl RenderBackend for Stamp {
    fn render_scene(&self, scene: &Scene) -> IconResult<FrameRGBA> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let f = scene.frame.0;
        Ok(FrameRGBA {
            width: 1,
            height: 1,
            data: vec![(f & 0xff) as u8, (f >> 8) as u8, 0, 255],
            premultiplied: true,
        })
    }
}

struct Failing;

impl RenderBackend for Failing {
    fn render_scene(&self, _scene: &Scene) -> IconResult<FrameRGBA> {
        Err(IconError::render("boom"))
    }
}

fn entry() -> CompositionEntry {
    CompositionEntry {
        id: "Stamp".to_owned(),
        icon: Icon::Ai,
        config: VideoConfig::new(
            Fps::new(30, 1).unwrap(),
            180,
            Canvas {
                width: 1,
                height: 1,
            },
        )
        .unwrap(),
    }
}

fn range(a: u64, b: u64) -> FrameRange {
    FrameRange::new(FrameIndex(a), FrameIndex(b)).unwrap()
}

fn stamps(sink: &InMemorySink) -> Vec<u64> {
    sink.frames()
        .iter()
        .map(|(_, f)| u64::from(f.data[0]) | (u64::from(f.data[1]) << 8))
        .collect()
}

#[test]
fn sequential_range_is_ordered() {
    let backend = Stamp::default();
    let mut sink = InMemorySink::new();
    let stats = render_range(
        &entry(),
        range(5, 12),
        &backend,
        &RenderThreading::default(),
        &mut sink,
    )
    .unwrap();

    assert_eq!(stamps(&sink), (5..12).collect::<Vec<_>>());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (5..12).collect::<Vec<_>>());
    assert_eq!(
        stats,
        RenderStats {
            frames_total: 7,
            frames_rendered: 7,
            frames_elided: 0,
        }
    );
    assert_eq!(backend.calls.load(Ordering::Relaxed), 7);
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (1, 1, Fps { num: 30, den: 1 }));
}

#[test]
fn parallel_chunks_keep_order() {
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 3,
        threads: Some(4),
        static_frame_elision: false,
    };
    let mut sink = InMemorySink::new();
    let stats = render_range(
        &entry(),
        range(0, 20),
        &Stamp::default(),
        &threading,
        &mut sink,
    )
    .unwrap();
    assert_eq!(stamps(&sink), (0..20).collect::<Vec<_>>());
    assert_eq!(stats.frames_total, 20);
}

#[test]
fn elision_does_not_change_output() {
    let plain = render_frames(
        &entry(),
        range(0, 8),
        &Stamp::default(),
        &RenderThreading::default(),
    )
    .unwrap();
    let elided = render_frames(
        &entry(),
        range(0, 8),
        &Stamp::default(),
        &RenderThreading {
            static_frame_elision: true,
            ..RenderThreading::default()
        },
    )
    .unwrap();
    assert_eq!(plain.0, elided.0);
    assert_eq!(
        elided.1.frames_rendered + elided.1.frames_elided,
        elided.1.frames_total
    );
}

#[test]
fn chunks_reaching_the_last_frame_index() {
    let threading = RenderThreading {
        chunk_size: 4,
        ..RenderThreading::default()
    };
    let mut sink = InMemorySink::new();
    let stats = render_range(
        &entry(),
        range(u64::MAX - 5, u64::MAX),
        &Stamp::default(),
        &threading,
        &mut sink,
    )
    .unwrap();
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (u64::MAX - 5..u64::MAX).collect::<Vec<_>>());
    assert_eq!(stats.frames_total, 5);
}

#[test]
fn empty_range_is_rejected() {
    let mut sink = InMemorySink::new();
    let err = render_range(
        &entry(),
        range(4, 4),
        &Stamp::default(),
        &RenderThreading::default(),
        &mut sink,
    )
    .unwrap_err();
    assert!(err.to_string().contains("non-empty"));
    assert!(sink.config().is_none());
}

#[test]
fn zero_threads_is_rejected() {
    let err = build_thread_pool(Some(0)).unwrap_err();
    assert!(err.to_string().contains("threads"));
    assert_eq!(normalized_chunk_size(0), 1);
    assert_eq!(normalized_chunk_size(64), 64);
}

#[test]
fn backend_errors_name_the_frame() {
    let err = render_frame(&entry(), FrameIndex(2), &Failing);
    // render_frame passes the backend error through untouched.
    assert!(err.unwrap_err().to_string().contains("boom"));

    let mut sink = InMemorySink::new();
    let err = render_range(
        &entry(),
        range(2, 4),
        &Failing,
        &RenderThreading::default(),
        &mut sink,
    )
    .unwrap_err();
    assert!(err.to_string().contains("frame 2"));
}

#[test]
fn frames_past_duration_still_render() {
    let e = Registry::builtin().get("AnimatedIcon").cloned().unwrap();
    let f = render_frame(&e, FrameIndex(10_000), &Stamp::default()).unwrap();
    assert_eq!(f.data[0], (10_000u64 & 0xff) as u8);
}
