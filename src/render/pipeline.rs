use std::collections::HashMap;

use rayon::prelude::*;

use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{IconError, IconResult};
use crate::registry::CompositionEntry;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::scene::layer::Scene;

/// Build the scene of `frame` and rasterize it.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels at the composition's canvas
/// size. Frames past `duration_in_frames` are still valid; the animation keeps running.
#[tracing::instrument(skip(entry, backend), fields(comp = %entry.id))]
pub fn render_frame(
    entry: &CompositionEntry,
    frame: FrameIndex,
    backend: &dyn RenderBackend,
) -> IconResult<FrameRGBA> {
    let scene = entry.render_scene(frame);
    scene.validate()?;
    backend.render_scene(&scene)
}

/// How [`render_range`] schedules rasterization.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Rasterize each chunk on a `rayon` pool.
    pub parallel: bool,
    /// Frames per chunk; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Pool size; `None` lets `rayon` decide.
    pub threads: Option<usize>,
    /// Rasterize identical scenes within a chunk only once.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Counters returned by [`render_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames delivered to the sink.
    pub frames_total: u64,
    /// Frames that were actually rasterized.
    pub frames_rendered: u64,
    /// Frames that reused an identical scene's pixels.
    pub frames_elided: u64,
}

/// Render `range` (start inclusive, end exclusive) into `sink`.
///
/// Ordering contract: frames reach the sink in strictly increasing order whether or not the
/// range is rendered in parallel, and the pixels are the same either way.
#[tracing::instrument(skip(entry, backend, threading, sink), fields(comp = %entry.id))]
pub fn render_range(
    entry: &CompositionEntry,
    range: FrameRange,
    backend: &dyn RenderBackend,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> IconResult<RenderStats> {
    if range.is_empty() {
        return Err(IconError::validation("render range must be non-empty"));
    }

    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    sink.begin(SinkConfig {
        width: entry.config.canvas.width,
        height: entry.config.canvas.height,
        fps: entry.config.fps,
    })?;

    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))?;
        let out = render_chunk(entry, chunk, backend, threading, pool.as_ref())?;

        for (f, &u) in chunk.iter().zip(&out.frame_to_unique) {
            let frame = out.unique_frames.get(u).ok_or_else(|| {
                IconError::render("internal error: unique frame index out of range")
            })?;
            sink.push_frame(f, frame)?;
        }

        tracing::debug!(
            start = chunk_start,
            end = chunk_end,
            rendered = out.stats.frames_rendered,
            elided = out.stats.frames_elided,
            "chunk done"
        );
        stats.frames_total += out.stats.frames_total;
        stats.frames_rendered += out.stats.frames_rendered;
        stats.frames_elided += out.stats.frames_elided;
        chunk_start = chunk_end;
    }

    sink.end()?;
    tracing::info!(
        frames = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "range rendered"
    );
    Ok(stats)
}

/// Render `range` and collect the frames in memory.
pub fn render_frames(
    entry: &CompositionEntry,
    range: FrameRange,
    backend: &dyn RenderBackend,
    threading: &RenderThreading,
) -> IconResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut sink = InMemorySink::new();
    let stats = render_range(entry, range, backend, threading, &mut sink)?;
    let frames = sink.into_frames().into_iter().map(|(_, f)| f).collect();
    Ok((frames, stats))
}

struct ChunkOut {
    unique_frames: Vec<FrameRGBA>,
    frame_to_unique: Vec<usize>,
    stats: RenderStats,
}

fn render_chunk(
    entry: &CompositionEntry,
    range: FrameRange,
    backend: &dyn RenderBackend,
    threading: &RenderThreading,
    pool: Option<&rayon::ThreadPool>,
) -> IconResult<ChunkOut> {
    let scenes = range
        .iter()
        .map(|f| entry.render_scene(f))
        .collect::<Vec<_>>();
    for scene in &scenes {
        scene.validate()?;
    }

    let mut unique_indices = Vec::<usize>::with_capacity(scenes.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(scenes.len());
    if threading.static_frame_elision {
        let mut first = HashMap::<u64, usize>::new();
        for (idx, scene) in scenes.iter().enumerate() {
            let slot = *first.entry(scene.fingerprint()).or_insert_with(|| {
                unique_indices.push(idx);
                unique_indices.len() - 1
            });
            frame_to_unique.push(slot);
        }
    } else {
        unique_indices.extend(0..scenes.len());
        frame_to_unique.extend(0..scenes.len());
    }

    let rasterize = |idx: &usize| -> IconResult<FrameRGBA> { render_one(backend, &scenes[*idx]) };
    let rendered = match pool {
        Some(pool) => pool.install(|| {
            unique_indices
                .par_iter()
                .map(rasterize)
                .collect::<Vec<_>>()
        }),
        None => unique_indices.iter().map(rasterize).collect::<Vec<_>>(),
    };

    let mut unique_frames = Vec::<FrameRGBA>::with_capacity(rendered.len());
    for item in rendered {
        unique_frames.push(item?);
    }

    let total = scenes.len() as u64;
    let rendered_count = unique_indices.len() as u64;
    Ok(ChunkOut {
        unique_frames,
        frame_to_unique,
        stats: RenderStats {
            frames_total: total,
            frames_rendered: rendered_count,
            frames_elided: total.saturating_sub(rendered_count),
        },
    })
}

fn render_one(backend: &dyn RenderBackend, scene: &Scene) -> IconResult<FrameRGBA> {
    backend
        .render_scene(scene)
        .map_err(|e| IconError::render(format!("frame {}: {e}", scene.frame.0)))
}

fn build_thread_pool(threads: Option<usize>) -> IconResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IconError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let builder = match threads {
        Some(n) => rayon::ThreadPoolBuilder::new().num_threads(n),
        None => rayon::ThreadPoolBuilder::new(),
    };
    builder
        .build()
        .map_err(|e| IconError::render(format!("rayon pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
