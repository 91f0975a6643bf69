//! Text color specifications: hex codes, `rgb()` functions, and names.

use core::fmt;

use palette::Srgb;

use crate::color::model::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHex,
    InvalidFunction,
    OutOfRange,
    UnknownName,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ColorParseError::*;
        let msg = match self {
            Empty => "empty color string",
            InvalidHex => "invalid hex color",
            InvalidFunction => "invalid rgb() function",
            OutOfRange => "component out of range",
            UnknownName => "unknown color name",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// Parse a hex color. `hex` excludes the leading `#`.
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
///
/// Alpha digits must be valid hex but are discarded.
fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InvalidHex);
    }

    let rgb = match hex.len() {
        3 | 6 => hex,
        4 => &hex[..3],
        8 => &hex[..6],
        _ => return Err(InvalidHex),
    };

    rgb.parse::<Srgb<u8>>()
        .map(Color::from)
        .map_err(|_| InvalidHex)
}

/// Parse the arguments of `rgb(r, g, b)` with integer components.
fn parse_rgb_function(args: &str) -> Result<Color, ColorParseError> {
    use ColorParseError::*;

    let nums: Vec<&str> = args.split(',').map(str::trim).collect();
    let [r, g, b] = nums.as_slice() else {
        return Err(InvalidFunction);
    };

    let component = |s: &str| -> Result<u8, ColorParseError> {
        let v = s.parse::<i32>().map_err(|_| InvalidFunction)?;
        u8::try_from(v).map_err(|_| OutOfRange)
    };

    Ok(Color::rgb(component(r)?, component(g)?, component(b)?))
}

/// Look up a CSS/SVG color keyword, ignoring case and interior spaces.
fn parse_name(name: &str) -> Result<Color, ColorParseError> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    // Fully transparent white; alpha is dropped.
    if key == "transparent" {
        return Ok(Color::WHITE);
    }

    palette::named::from_str(&key)
        .map(Color::from)
        .ok_or(ColorParseError::UnknownName)
}

pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgb(")
        .and_then(|x| x.strip_suffix(')'))
    {
        return parse_rgb_function(args);
    }

    parse_name(s)
}

impl core::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
