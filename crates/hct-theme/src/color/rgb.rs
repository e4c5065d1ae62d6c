//! 8-bit sRGB color type and the hex codec.
//!
//! [`Rgb`] is the interchange type of the engine: seeds come in as hex
//! strings, schemes and palettes go out as hex strings, and every
//! intermediate color space converts to and from it.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A gamma-encoded sRGB color with 8-bit channels.
///
/// The canonical textual form is `#RRGGBB` in uppercase (see the
/// [`Display`](fmt::Display) impl). Parsing accepts either case, with or
/// without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integer channels, clamping each to 0..=255.
    ///
    /// # Example
    /// ```
    /// use hct_theme::Rgb;
    /// assert_eq!(Rgb::clamped(300, -4, 128), Rgb::new(255, 0, 128));
    /// ```
    #[inline]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Create a color from normalized channels (0.0..=1.0).
    ///
    /// Each channel is clamped to [0, 1] before scaling and rounding.
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// Channels as a byte array `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical `#RRGGBB` uppercase form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Largest channel minus smallest channel, divided by the largest.
    ///
    /// Returns 0.0 for black.
    pub fn saturation(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        if max == 0 {
            return 0.0;
        }
        f64::from(max - min) / f64::from(max)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a 6-digit hex string.
    ///
    /// Accepts `#RRGGBB` and `RRGGBB`, case-insensitive, with surrounding
    /// whitespace trimmed. Shorthand and alpha forms are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use hct_theme::Rgb;
    ///
    /// let red: Rgb = "#ff0000".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// assert!("#F00".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength {
                found: s.chars().count(),
            });
        }
        // from_str_radix tolerates a leading '+', so check digits up front
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit);
        }

        let channel = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| ParseColorError::InvalidDigit)
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Parse a hex color string. See [`Rgb::from_str`].
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ParseColorError> {
    hex.parse()
}

/// Format integer channels as `#RRGGBB`, clamping each to 0..=255.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Rgb::clamped(r, g, b).to_hex()
}
