use crate::foundation::error::IconResult;
use crate::foundation::math::unpremultiply_rgba8;
use crate::scene::layer::Scene;

/// A rendered frame as RGBA8 pixels.
///
/// Rasterizers produce **premultiplied** alpha. The `premultiplied` flag makes this explicit at
/// API boundaries; use [`FrameRGBA::to_straight_rgba8`] before handing pixels to image encoders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixel data with straight (non-premultiplied) alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply_rgba8([px[0], px[1], px[2], px[3]]));
        }
        out
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// If set, backends clear the target to this straight RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

/// A renderer that turns a [`Scene`] into a [`FrameRGBA`].
///
/// Backends are shared by reference across `rayon` workers, so they must be `Sync` and must not
/// keep per-frame mutable state.
pub trait RenderBackend: Sync {
    /// Rasterize one scene at its canvas size.
    fn render_scene(&self, scene: &Scene) -> IconResult<FrameRGBA>;
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
