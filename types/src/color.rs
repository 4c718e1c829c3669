//! Theme color values.

use serde::Deserialize;
use thiserror::Error;

/// An RGB color parsed from `#RRGGBB` notation.
///
/// Deserializes directly from the hex string form used in theme config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("expected a #RRGGBB hex color (got {0:?})")]
pub struct HexColorError(String);

impl HexColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(raw: &str) -> Result<Self, HexColorError> {
        let trimmed = raw.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| HexColorError(raw.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HexColorError(raw.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| HexColorError(raw.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::HexColor;

    #[test]
    fn parses_hex_notation() {
        assert_eq!(HexColor::parse("#A8D8FF"), Ok(HexColor::rgb(168, 216, 255)));
        assert_eq!(HexColor::parse("#000000"), Ok(HexColor::rgb(0, 0, 0)));
    }

    #[test]
    fn lowercase_and_padding_are_accepted() {
        assert_eq!(
            HexColor::parse("  #7fb8ff "),
            Ok(HexColor::rgb(127, 184, 255))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(HexColor::parse("A8D8FF").is_err()); // missing '#'
        assert!(HexColor::parse("#A8D8F").is_err()); // short
        assert!(HexColor::parse("#GGGGGG").is_err()); // not hex
        assert!(HexColor::parse("").is_err());
    }
}
