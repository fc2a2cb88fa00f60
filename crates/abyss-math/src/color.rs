//! sRGB colour parsed from and written as `#rrggbb` strings.

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a hex colour string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The string did not contain exactly six hex digits.
    #[error("expected 6 hex digits in colour {0:?}")]
    BadLength(String),
    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit in colour {0:?}")]
    BadDigit(String),
}

/// An sRGB colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::from_u32(0x000000);

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        Ok(Self::from_u32(packed))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Convert to linear RGB for shading.
    pub fn to_linear(&self) -> glam::Vec3 {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        glam::Vec3::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Components as an array.
    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}
