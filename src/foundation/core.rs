use crate::foundation::error::{IconError, IconResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Absolute 0-based frame index supplied by the host.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Validate a host-provided floating point frame value.
    ///
    /// Negative, non-finite and fractional values are rejected here so that the render functions
    /// only ever see well-formed indices.
    pub fn from_f64(v: f64) -> IconResult<Self> {
        if !v.is_finite() {
            return Err(IconError::validation("frame must be finite"));
        }
        if v < 0.0 {
            return Err(IconError::validation("frame must be >= 0"));
        }
        if v.fract() != 0.0 {
            return Err(IconError::validation("frame must be an integer"));
        }
        if v > u64::MAX as f64 {
            return Err(IconError::validation("frame is out of range"));
        }
        Ok(Self(v as u64))
    }

    /// Frame index as `f64`, for the periodic formulas.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> IconResult<Self> {
        if start.0 > end.0 {
            return Err(IconError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Iterate the frame indices of the range in order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> IconResult<Self> {
        if den == 0 {
            return Err(IconError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(IconError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas center in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Read-only video configuration of one composition.
///
/// Invariant for the lifetime of a render; every frame is derived from this and the frame index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VideoConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Nominal length of the composition. Frames past it still render.
    pub duration_in_frames: u64,
    /// Output canvas.
    pub canvas: Canvas,
}

impl VideoConfig {
    /// Create a validated configuration.
    pub fn new(fps: Fps, duration_in_frames: u64, canvas: Canvas) -> IconResult<Self> {
        if duration_in_frames == 0 {
            return Err(IconError::validation("duration_in_frames must be > 0"));
        }
        if canvas.width == 0 || canvas.height == 0 {
            return Err(IconError::validation("canvas width/height must be > 0"));
        }
        Ok(Self {
            fps,
            duration_in_frames,
            canvas,
        })
    }

    /// The full nominal range `[0, duration)`.
    pub fn full_range(self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_in_frames),
        }
    }

    /// Elapsed seconds at `frame`.
    pub fn secs(self, frame: FrameIndex) -> f64 {
        self.fps.frames_to_secs(frame.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
