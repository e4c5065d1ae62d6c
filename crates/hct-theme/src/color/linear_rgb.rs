//! Linear RGB color type
//!
//! Linear RGB is the space where the sRGB→XYZ matrix applies. Gamma decode
//! and encode follow IEC 61966-2-1 exactly (no lookup table: the engine
//! converts a handful of colors per call, not whole frames).

use super::rgb::Rgb;

/// A color in linear RGB color space.
///
/// Values are in 0.0..=1.0 when decoded from [`Rgb`], but may leave that
/// range on the way back from XYZ for out-of-gamut colors. Encoding to
/// [`Rgb`] clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// sRGB transfer function decode (IEC 61966-2-1).
#[inline]
pub(crate) fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function encode (IEC 61966-2-1).
#[inline]
pub(crate) fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

impl From<Rgb> for LinearRgb {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(f64::from(rgb.r) / 255.0),
            g: srgb_to_linear(f64::from(rgb.g) / 255.0),
            b: srgb_to_linear(f64::from(rgb.b) / 255.0),
        }
    }
}

impl From<LinearRgb> for Rgb {
    /// Gamma encode, then clamp each channel to [0, 1] and round to 8 bits.
    fn from(linear: LinearRgb) -> Self {
        Rgb::from_unit(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}
