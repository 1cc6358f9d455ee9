use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "iconreel_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(30, 1).unwrap(),
    }
}

fn half_red(width: u32, height: u32) -> FrameRGBA {
    let mut data = Vec::new();
    for _ in 0..width * height {
        data.extend_from_slice(&[128, 0, 0, 128]);
    }
    FrameRGBA {
        width,
        height,
        data,
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_resets_on_begin() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(1, 1)).unwrap();
    sink.push_frame(FrameIndex(0), &half_red(1, 1)).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.frames().len(), 1);

    sink.begin(cfg(2, 2)).unwrap();
    assert!(sink.frames().is_empty());
    assert_eq!(sink.config().unwrap().width, 2);
}

#[test]
fn png_sequence_names_and_unpremultiplies() {
    let dir = temp_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&dir, "DataIcon");
    sink.begin(cfg(3, 2)).unwrap();
    sink.push_frame(FrameIndex(7), &half_red(3, 2)).unwrap();
    sink.push_frame(FrameIndex(8), &half_red(3, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[dir.join("DataIcon-00007.png"), dir.join("DataIcon-00008.png")]
    );
    let img = image::open(dir.join("DataIcon-00007.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1).0, [255, 0, 0, 128]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sequence_rejects_misuse() {
    let dir = temp_dir("png_misuse");
    let mut sink = PngSequenceSink::new(&dir, "x");
    let err = sink.push_frame(FrameIndex(0), &half_red(1, 1)).unwrap_err();
    assert!(err.to_string().contains("before begin"));

    sink.begin(cfg(2, 2)).unwrap();
    let err = sink.push_frame(FrameIndex(0), &half_red(1, 1)).unwrap_err();
    assert!(matches!(err, IconError::Encode(_)));

    let _ = std::fs::remove_dir_all(&dir);
}
