//! RGB color handling with hex parsing and serialization.
//!
//! Palette slots store free text, so this type is only used at the edges:
//! drawing swatches, blending gradients and nudging channels in the editor.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use tapiz_designer::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FFD700").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 215, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Lenient parse used by renderers: malformed text yields `None`.
    #[must_use]
    pub fn parse_lenient(text: &str) -> Option<Self> {
        Self::from_hex(text).ok()
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Linear interpolation towards `other`; `t` is clamped to 0.0-1.0.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Relative luminance (0.0-1.0), sRGB weights without gamma correction.
    #[must_use]
    pub fn luminance(&self) -> f32 {
        (0.2126 * f32::from(self.r) + 0.7152 * f32::from(self.g) + 0.0722 * f32::from(self.b))
            / 255.0
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn contrast_text(&self) -> Self {
        if self.luminance() > 0.55 {
            Self::new(0, 0, 0)
        } else {
            Self::new(255, 255, 255)
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("rojo").is_err());
    }

    #[test]
    fn test_from_hex_rejects_signed_channels() {
        assert!(RgbColor::from_hex("#+F+F+F").is_err());
        assert!(RgbColor::from_hex("+FFFFF").is_err());
        assert!(RgbColor::parse_lenient("#-1-1-1").is_none());
    }

    #[test]
    fn test_from_hex_non_ascii_does_not_panic() {
        // Six bytes but not six characters
        assert!(RgbColor::from_hex("#ñññ").is_err());
        assert!(RgbColor::parse_lenient("🌻🌻").is_none());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_hex_case_normalized() {
        let parsed = RgbColor::from_hex("#deb887").unwrap();
        assert_eq!(parsed.to_hex(), "#DEB887");
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = RgbColor::new(0, 0, 0);
        let b = RgbColor::new(200, 100, 50);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), RgbColor::new(100, 50, 25));
        assert_eq!(a.lerp(&b, 7.0), b);
    }

    #[test]
    fn test_contrast_text() {
        let beige = RgbColor::from_hex("#F5F5DC").unwrap();
        assert_eq!(beige.contrast_text(), RgbColor::new(0, 0, 0));

        let dark_red = RgbColor::from_hex("#8B0000").unwrap();
        assert_eq!(dark_red.contrast_text(), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }
}
