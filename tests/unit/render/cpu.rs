use super::*;

use crate::foundation::core::{Canvas, Fps, FrameIndex, VideoConfig};
use crate::registry::CompositionEntry;
use crate::registry::icon::Icon;

fn backend(settings: RenderSettings) -> CpuBackend {
    CpuBackend::with_fontdb(settings, Arc::new(usvg::fontdb::Database::new()))
}

const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4" viewBox="0 0 4 4"><rect x="0" y="0" width="2" height="4" fill="#ff0000"/></svg>"##;

#[test]
fn rasterizes_premultiplied_rgba() {
    let f = backend(RenderSettings::default())
        .rasterize_svg(RED_SQUARE, 4, 4)
        .unwrap();
    assert_eq!((f.width, f.height, f.data.len()), (4, 4, 64));
    assert!(f.premultiplied);
    assert_eq!(f.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(3, 3), Some([0, 0, 0, 0]));
}

#[test]
fn view_box_is_scaled_to_target_size() {
    let f = backend(RenderSettings::default())
        .rasterize_svg(RED_SQUARE, 8, 8)
        .unwrap();
    assert_eq!(f.pixel(3, 7), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(4, 0), Some([0, 0, 0, 0]));
}

#[test]
fn clear_color_fills_background() {
    let b = backend(RenderSettings {
        clear_rgba: Some([10, 20, 30, 255]),
    });
    let f = b.rasterize_svg(RED_SQUARE, 4, 4).unwrap();
    assert_eq!(f.pixel(3, 0), Some([10, 20, 30, 255]));
    assert_eq!(f.pixel(0, 0), Some([255, 0, 0, 255]));
}

#[test]
fn bad_input_is_a_render_error() {
    let b = backend(RenderSettings::default());
    let err = b.rasterize_svg("<svg", 4, 4).unwrap_err();
    assert!(matches!(err, IconError::Render(_)));

    let err = b.rasterize_svg(RED_SQUARE, 0, 4).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn icon_scene_draws_something() {
    let entry = CompositionEntry {
        id: "Small".to_owned(),
        icon: Icon::Data,
        config: VideoConfig::new(
            Fps::new(30, 1).unwrap(),
            10,
            Canvas {
                width: 160,
                height: 160,
            },
        )
        .unwrap(),
    };
    let b = backend(RenderSettings::default());
    let f = b.render_scene(&entry.render_scene(FrameIndex(3))).unwrap();
    assert_eq!((f.width, f.height), (160, 160));
    assert!(!f.is_blank());
}

#[test]
fn with_settings_keeps_fonts() {
    let b = backend(RenderSettings::default());
    let c = b.with_settings(RenderSettings {
        clear_rgba: Some([0, 0, 0, 255]),
    });
    assert!(Arc::ptr_eq(&b.fontdb, &c.fontdb));
    assert_eq!(c.settings().clear_rgba, Some([0, 0, 0, 255]));
}
