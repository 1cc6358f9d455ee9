use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::math::{interpolate, wrap};

/// Closed-form periodic functions of the frame index.
///
/// Every variant is total over `FrameIndex` and carries no state, so any frame can be sampled in
/// any order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Wave {
    /// `interpolate(sin(2π · freq_hz · t), [-1, 1], [lo, hi])`, `t` in seconds.
    Sine {
        /// Cycles per second.
        freq_hz: f64,
        /// Output at the trough.
        lo: f64,
        /// Output at the crest.
        hi: f64,
    },
    /// `(frame mod period) · step`.
    Sweep {
        /// Period in frames.
        period: u64,
        /// Increment per frame.
        step: f64,
    },
    /// `((frame + delay) mod period) / period`, a linear ramp in `[0, 1)`.
    Cycle {
        /// Period in frames.
        period: u64,
        /// Phase delay in frames.
        delay: u64,
    },
    /// `min(1, (frame mod period) / fill)`: ramps over `fill` frames, then holds.
    FillHold {
        /// Period in frames.
        period: u64,
        /// Frames spent ramping.
        fill: u64,
    },
    /// `1` while `floor(frame / half) mod 2 == 0`, else `0`.
    Blink {
        /// Frames per on/off half.
        half: u64,
    },
}

impl Wave {
    /// Sample the wave at `frame`.
    ///
    /// Zero periods are treated as one frame so that the function stays total.
    pub fn sample(self, frame: FrameIndex, fps: Fps) -> f64 {
        let f = frame.0;
        match self {
            Self::Sine { freq_hz, lo, hi } => {
                let secs = fps.frames_to_secs(f);
                interpolate(
                    (std::f64::consts::TAU * freq_hz * secs).sin(),
                    [-1.0, 1.0],
                    [lo, hi],
                )
            }
            Self::Sweep { period, step } => (f % period.max(1)) as f64 * step,
            Self::Cycle { period, delay } => {
                let period = u128::from(period.max(1));
                ((u128::from(f) + u128::from(delay)) % period) as f64 / period as f64
            }
            Self::FillHold { period, fill } => {
                let into = (f % period.max(1)) as f64;
                (into / fill.max(1) as f64).min(1.0)
            }
            Self::Blink { half } => {
                if (f / half.max(1)) % 2 == 0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Sample with time counted in frames, so `Sine::freq_hz` reads as cycles per frame.
    pub fn at(self, frame: FrameIndex) -> f64 {
        self.sample(frame, Fps { num: 1, den: 1 })
    }
}

/// `sin(rate · frame + phase)` with `rate` in radians per frame.
pub fn osc(frame: FrameIndex, rate: f64, phase: f64) -> f64 {
    (rate * frame.as_f64() + phase).sin()
}

/// `(rate · frame + offset) mod 1`, a per-frame linear progress.
pub fn travel(frame: FrameIndex, rate: f64, offset: f64) -> f64 {
    wrap(rate * frame.as_f64() + offset, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/wave.rs"]
mod tests;
