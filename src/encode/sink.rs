use std::path::{Path, PathBuf};

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{IconError, IconResult};
use crate::render::backend::FrameRGBA;

/// Output geometry and rate announced to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Composition frame rate.
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// A range render calls `begin` once, then `push_frame` for every frame of the range in strictly
/// increasing order, then `end`. An error from any call aborts the render.
pub trait FrameSink: Send {
    /// Prepare for a range of `cfg`-sized frames.
    fn begin(&mut self, cfg: SinkConfig) -> IconResult<()>;
    /// Consume frame `idx`.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> IconResult<()>;
    /// Flush after the last frame.
    fn end(&mut self) -> IconResult<()>;
}

/// Keeps every pushed frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration seen by the last `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Take the captured frames.
    pub fn into_frames(self) -> Vec<(FrameIndex, FrameRGBA)> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> IconResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> IconResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> IconResult<()> {
        Ok(())
    }
}

/// Writes every frame as `<dir>/<stem>-<frame:05>.png` with straight alpha.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    stem: String,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`, which is created on `begin` if missing.
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
            cfg: None,
            written: Vec::new(),
        }
    }

    /// Path of the file written for `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}-{:05}.png", self.stem, idx.0))
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> IconResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            IconError::encode(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> IconResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| IconError::encode("push_frame called before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(IconError::encode(format!(
                "frame {} is {}x{}, sink expects {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        tracing::debug!(frame = idx.0, path = %path.display(), "wrote png");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> IconResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence complete"
        );
        Ok(())
    }
}

/// Encode one frame as a PNG file with straight alpha.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> IconResult<()> {
    let rgba = frame.to_straight_rgba8();
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| IconError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
