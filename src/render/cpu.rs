use std::sync::Arc;

use crate::foundation::error::{IconError, IconResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::scene::layer::Scene;

/// Scenes larger than this on either side are refused instead of allocated.
const MAX_DIM: u32 = 16_384;

/// CPU rasterizer: SVG document in, premultiplied RGBA8 out.
///
/// The font database is loaded once and shared through an [`Arc`], so cloning a backend (or
/// sharing it by reference between `rayon` workers) does not rescan system fonts.
#[derive(Clone)]
pub struct CpuBackend {
    settings: RenderSettings,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("settings", &self.settings)
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl CpuBackend {
    /// Backend with the system fonts loaded.
    pub fn new(settings: RenderSettings) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::with_fontdb(settings, Arc::new(db))
    }

    /// Backend sharing an already populated font database.
    pub fn with_fontdb(settings: RenderSettings, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { settings, fontdb }
    }

    /// Same fonts, different settings.
    pub fn with_settings(&self, settings: RenderSettings) -> Self {
        Self {
            settings,
            fontdb: Arc::clone(&self.fontdb),
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Rasterize an SVG document into a `width x height` frame, scaling its view to fit.
    pub fn rasterize_svg(&self, svg: &str, width: u32, height: u32) -> IconResult<FrameRGBA> {
        if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
            return Err(IconError::render(format!(
                "raster size {width}x{height} out of range (1..={MAX_DIM})"
            )));
        }

        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| IconError::render(format!("parse svg document: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| IconError::render("failed to allocate pixmap"))?;
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
        }

        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.data().to_vec(),
            premultiplied: true,
        })
    }
}

impl RenderBackend for CpuBackend {
    fn render_scene(&self, scene: &Scene) -> IconResult<FrameRGBA> {
        self.rasterize_svg(&scene.to_svg(), scene.canvas.width, scene.canvas.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
