use crate::foundation::error::{IconError, IconResult};

/// Straight-alpha sRGB color. Channels are 8-bit, alpha is a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::hex(0xffffff);

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    /// Color from 8-bit channels and a fractional alpha, like CSS `rgba()`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`, alpha excluded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Straight RGBA8 with alpha rounded to 8 bits.
    pub fn to_rgba8(self) -> [u8; 4] {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn parse_hex(s: &str) -> IconResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(IconError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            ));
        }

        fn hex_byte(pair: &str) -> IconResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| IconError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        match s.len() {
            6 | 8 => {
                let r = hex_byte(&s[0..2])?;
                let g = hex_byte(&s[2..4])?;
                let b = hex_byte(&s[4..6])?;
                let a = if s.len() == 8 {
                    f64::from(hex_byte(&s[6..8])?) / 255.0
                } else {
                    1.0
                };
                Ok(Self::rgba(r, g, b, a))
            }
            _ => Err(IconError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            )),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
