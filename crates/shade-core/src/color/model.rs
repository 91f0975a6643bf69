//! 8-bit RGB color value.

use std::fmt;

use glam::Vec3;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::parse::{ColorParseError, parse_color};

/// An opaque sRGB color with 8-bit channels.
///
/// Serializes as an uppercase `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels widened to floats in `0.0..=255.0`.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    /// Re-encode float channels to 8 bits.
    ///
    /// Channels are clamped to `0.0..=255.0` then rounded half-up, so tiny
    /// floating point drift never wraps or truncates a channel.
    pub fn from_vec3(v: Vec3) -> Self {
        let v = v.clamp(Vec3::ZERO, Vec3::splat(255.0));
        let encode = |c: f32| (c + 0.5).floor() as u8;
        Self::rgb(encode(v.x), encode(v.y), encode(v.z))
    }

    /// Uppercase `#RRGGBB` encoding.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Self::rgb(c.red, c.green, c.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(c: Color) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_uppercase_and_padded() {
        assert_eq!(Color::rgb(204, 0, 10).to_hex(), "#CC000A");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_from_vec3_rounds_half_up() {
        let c = Color::from_vec3(Vec3::new(127.5, 203.999_99, 0.49));
        assert_eq!(c, Color::rgb(128, 204, 0));
    }

    #[test]
    fn test_from_vec3_clamps_drift() {
        let c = Color::from_vec3(Vec3::new(255.000_1, -0.000_1, 300.0));
        assert_eq!(c, Color::rgb(255, 0, 255));
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::rgb(255, 128, 0)).unwrap();
        assert_eq!(json, "\"#FF8000\"");
        let back: Color = serde_json::from_str("\"orange\"").unwrap();
        assert_eq!(back, Color::rgb(255, 165, 0));
    }
}
