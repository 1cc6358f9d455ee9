use crate::animation::wave::Wave;
use crate::foundation::core::{FrameIndex, VideoConfig};

/// Pedestal spin: 2 degrees per frame, wrapping every 180 frames.
pub(crate) const SPIN: Wave = Wave::Sweep {
    period: 180,
    step: 2.0,
};

/// Content tilt: ±8 degrees at 0.3 Hz.
pub(crate) const TILT: Wave = Wave::Sine {
    freq_hz: 0.3,
    lo: -8.0,
    hi: 8.0,
};

/// Vertical bob: ±15 px at 0.6 Hz.
pub(crate) const BOB: Wave = Wave::Sine {
    freq_hz: 0.6,
    lo: -15.0,
    hi: 15.0,
};

/// Content follows the bob at this fraction of its amplitude.
pub(crate) const CARD_FOLLOW: f64 = 0.7;

/// Per-frame scalars shared by the pedestal and content layers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DerivedScalars {
    /// Pedestal spin in degrees, `[0, 360)`.
    pub base_rotation: f64,
    /// Content tilt about the vertical axis in degrees, `[-8, 8]`.
    pub card_rotation: f64,
    /// Pedestal vertical offset in pixels, `[-15, 15]`.
    pub ring_y_offset: f64,
    /// Content vertical offset in pixels.
    pub card_y_offset: f64,
    /// Glow opacity, `[0.15, 0.45]`.
    pub glow_intensity: f64,
}

/// Derive every animated scalar of `frame` from scratch.
///
/// Total over all frame indices, including frames past `duration_in_frames`.
pub fn compose(frame: FrameIndex, config: &VideoConfig) -> DerivedScalars {
    let fps = config.fps;
    let ring_y_offset = BOB.sample(frame, fps);
    DerivedScalars {
        base_rotation: SPIN.sample(frame, fps),
        card_rotation: TILT.sample(frame, fps),
        ring_y_offset,
        card_y_offset: CARD_FOLLOW * ring_y_offset,
        glow_intensity: glow_intensity(frame),
    }
}

/// `0.3 + 0.15 · sin(0.08 · frame)`.
pub(crate) fn glow_intensity(frame: FrameIndex) -> f64 {
    0.3 + 0.15 * (0.08 * frame.as_f64()).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/compose.rs"]
mod tests;
