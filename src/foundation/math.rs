/// How [`interpolate`] treats inputs outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the linear mapping past the range.
    #[default]
    Extend,
    /// Pin to the nearest output bound.
    Clamp,
}

/// Linearly remap `x` from `input` to `output`, extending past both ends.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    interpolate_with(x, input, output, Extrapolate::Extend, Extrapolate::Extend)
}

/// Linearly remap `x` from `input` to `output` with explicit extrapolation per side.
///
/// A degenerate input range maps everything to `output[0]`.
pub fn interpolate_with(
    x: f64,
    input: [f64; 2],
    output: [f64; 2],
    left: Extrapolate,
    right: Extrapolate,
) -> f64 {
    let [i0, i1] = input;
    let [o0, o1] = output;
    let span = i1 - i0;
    if span == 0.0 {
        return o0;
    }

    let mut t = (x - i0) / span;
    if t < 0.0 && left == Extrapolate::Clamp {
        t = 0.0;
    }
    if t > 1.0 && right == Extrapolate::Clamp {
        t = 1.0;
    }
    o0 + (o1 - o0) * t
}

/// Floating point modulus that stays in `[0, m)` for positive `m`.
pub fn wrap(x: f64, m: f64) -> f64 {
    x.rem_euclid(m)
}

/// Clamp an opacity-like value into `[0, 1]`.
pub fn unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Point at parameter `t` on the segment `a -> b`.
pub fn lerp_point(a: kurbo::Point, b: kurbo::Point, t: f64) -> kurbo::Point {
    a.lerp(b, t)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Convert one premultiplied RGBA8 pixel to straight alpha.
pub(crate) fn unpremultiply_rgba8(px: [u8; 4]) -> [u8; 4] {
    let a = px[3];
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| -> u8 {
        let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
        v.min(255) as u8
    };
    [un(px[0]), un(px[1]), un(px[2]), a]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
