use crate::error::{PrismError, PrismResult};
use serde::{Deserialize, Serialize};

/// RGBA color with f32 components in the [0.0, 1.0] range.
///
/// This is the normalized form expected by shader uniforms; draw code that
/// works in 0-255 space converts on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new RGBA color.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> PrismResult<Self> {
        let hex = hex.trim_start_matches('#');
        // Hex digits are ASCII; anything else must fail before the byte
        // slicing below, which would panic on a multi-byte character.
        if !hex.is_ascii() {
            return Err(PrismError::InvalidArgument(format!(
                "invalid hex color '{hex}'"
            )));
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| PrismError::InvalidArgument(format!("invalid hex color '{hex}'")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(component(0..2)?, component(2..4)?, component(4..6)?)),
            8 => Ok(Self::rgba(
                component(0..2)?,
                component(2..4)?,
                component(4..6)?,
                component(6..8)?,
            )),
            _ => Err(PrismError::InvalidArgument(format!(
                "invalid hex color '{hex}'"
            ))),
        }
    }

    /// The normalized component array, in the layout uniform upload expects.
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_hex_rgba() {
        let c = Color::from_hex("00FF0080").unwrap();
        assert_eq!(c.g, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Color::from_hex("#F00").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_from_hex_rejects_multibyte_input() {
        // 6 bytes but not 6 hex digits; must be an error, not a panic
        assert!(Color::from_hex("a\u{00a3}bcd").is_err());
        assert!(Color::from_hex("#\u{00e9}\u{00e9}\u{00e9}FF").is_err());
    }

    #[test]
    fn test_to_array() {
        assert_eq!(Color::WHITE.to_array(), [1.0, 1.0, 1.0, 1.0]);
    }
}
