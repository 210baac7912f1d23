//! 8-bit RGB color type.

use std::fmt;
use std::str::FromStr;

use super::error::{ColorErrorKind, ParseColorError};

/// Rec. 709 luma weights applied to 8-bit channel values.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// An opaque color with 8-bit channels.
///
/// Used for the configured dot and background colors as well as for
/// the per-cell mean color when dots take their color from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from floating point channel means.
    ///
    /// Each channel is rounded half away from zero and clamped to 0..=255.
    ///
    /// ```
    /// use dot_render::Rgb;
    /// assert_eq!(Rgb::from_mean(127.5, 0.49, 300.0), Rgb::new(128, 0, 255));
    /// ```
    #[inline]
    pub fn from_mean(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Weighted luma on the 0.0..=255.0 scale.
    ///
    /// ```
    /// use dot_render::Rgb;
    /// assert_eq!(Rgb::BLACK.luma(), 0.0);
    /// assert!((Rgb::WHITE.luma() - 255.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn luma(self) -> f64 {
        LUMA_WEIGHTS[0] * self.r as f64
            + LUMA_WEIGHTS[1] * self.g as f64
            + LUMA_WEIGHTS[2] * self.b as f64
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB`
    /// - `#RGB` / `RGB` (each digit is doubled)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// ```
    /// use dot_render::Rgb;
    ///
    /// let mint: Rgb = "#9fe4d0".parse().unwrap();
    /// assert_eq!(mint, Rgb::new(0x9f, 0xe4, 0xd0));
    ///
    /// let red: Rgb = "F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let digits = input.strip_prefix('#').unwrap_or(input);

        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(c))
            .collect::<Result<Vec<u8>, char>>()
            .map_err(|c| ParseColorError::new(input, ColorErrorKind::NotHexDigit(c)))?;

        match *nibbles.as_slice() {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            _ => Err(ParseColorError::new(
                input,
                ColorErrorKind::DigitCount(nibbles.len()),
            )),
        }
    }
}
