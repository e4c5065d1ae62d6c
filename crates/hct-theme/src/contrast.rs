//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Luminance here uses the WCAG transfer threshold (`0.03928`), not the
//! IEC 61966-2-1 one (`0.04045`) used by the color space conversions. The
//! two differ only for channel values 10 and 11 and the WCAG formula is what
//! contrast checkers implement.

use crate::color::{ParseColorError, Rgb};

/// WCAG AA minimum contrast for normal body text.
pub const WCAG_AA_NORMAL: f64 = 4.5;

#[inline]
fn channel_to_linear(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB color, in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * channel_to_linear(rgb.r)
        + 0.7152 * channel_to_linear(rgb.g)
        + 0.0722 * channel_to_linear(rgb.b)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// Symmetric in its arguments.
///
/// # Example
/// ```
/// use hct_theme::{contrast_ratio, Rgb};
///
/// let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
/// assert!((ratio - 21.0).abs() < 0.1);
/// ```
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ParseColorError> {
    Ok(contrast_ratio(a.parse()?, b.parse()?))
}

/// Pick black or white text for a background.
///
/// Black wins if it reaches [`WCAG_AA_NORMAL`], then white. When neither
/// does, falls back to comparing luminance against the midpoint. Always
/// returns [`Rgb::BLACK`] or [`Rgb::WHITE`].
pub fn accessible_text_color(background: Rgb) -> Rgb {
    if contrast_ratio(background, Rgb::BLACK) >= WCAG_AA_NORMAL {
        return Rgb::BLACK;
    }
    if contrast_ratio(background, Rgb::WHITE) >= WCAG_AA_NORMAL {
        return Rgb::WHITE;
    }
    if relative_luminance(background) > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// [`accessible_text_color`] for a hex background.
pub fn accessible_text_color_hex(background: &str) -> Result<Rgb, ParseColorError> {
    Ok(accessible_text_color(background.parse()?))
}
