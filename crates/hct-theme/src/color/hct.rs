//! Hue-Chroma-Tone color type
//!
//! This is a simplified, Lab-based approximation of Material's HCT space,
//! not the CAM16-derived original. Tone is Lab L*, hue is the Lab hue angle
//! and chroma is Lab chroma scaled by [`CHROMA_SCALE`].
//!
//! ```text
//! Rgb ──gamma decode──> LinearRgb ──matrix──> Xyz ──piecewise──> Lab ──polar──> Hct
//! Rgb <─clamp, round─── LinearRgb <─inverse── Xyz <──inverse──── Lab <─cartesian─ Hct
//! ```
//!
//! Round trips are exact up to 8-bit rounding for in-gamut colors; colors
//! built programmatically (e.g. a saturated hue at tone 99) may fall outside
//! sRGB and are clamped per channel on the way out.

use super::lab::{Lab, Xyz};
use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;

/// Empirical factor applied to Lab chroma. It has no physical derivation;
/// it brings Lab chroma roughly into the range Material's CAM16 chroma uses.
pub const CHROMA_SCALE: f64 = 0.8;

/// A color in (approximate) HCT space.
///
/// Invariants, enforced by every constructor and adjuster:
/// - `hue` in `[0, 360)` (wrapped)
/// - `chroma >= 0` (floored)
/// - `tone` in `[0, 100]` (clamped)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
}

#[inline]
fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[inline]
fn floor_chroma(chroma: f64) -> f64 {
    if chroma.is_nan() {
        0.0
    } else {
        chroma.max(0.0)
    }
}

#[inline]
fn clamp_tone(tone: f64) -> f64 {
    if tone.is_nan() {
        0.0
    } else {
        tone.clamp(0.0, 100.0)
    }
}

impl Hct {
    /// Create an HCT color, normalizing out-of-range components.
    ///
    /// # Example
    /// ```
    /// use hct_theme::Hct;
    ///
    /// let c = Hct::new(-30.0, -5.0, 120.0);
    /// assert_eq!(c.hue(), 330.0);
    /// assert_eq!(c.chroma(), 0.0);
    /// assert_eq!(c.tone(), 100.0);
    /// ```
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            chroma: floor_chroma(chroma),
            tone: clamp_tone(tone),
        }
    }

    /// Hue angle in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Colorfulness, `>= 0`.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Lightness, `[0, 100]`.
    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// Rotate hue by `delta` degrees, wrapping modulo 360.
    #[must_use]
    pub fn adjust_hue(self, delta: f64) -> Self {
        Self::new(self.hue + delta, self.chroma, self.tone)
    }

    /// Shift chroma by `delta`, flooring at 0.
    #[must_use]
    pub fn adjust_chroma(self, delta: f64) -> Self {
        Self::new(self.hue, self.chroma + delta, self.tone)
    }

    /// Shift tone by `delta`, clamping to `[0, 100]`.
    #[must_use]
    pub fn adjust_tone(self, delta: f64) -> Self {
        Self::new(self.hue, self.chroma, self.tone + delta)
    }

    /// Same hue and chroma at an absolute tone.
    #[must_use]
    pub fn with_tone(self, tone: f64) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }

    /// Same chroma and tone at an absolute hue.
    #[must_use]
    pub fn with_hue(self, hue: f64) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Same hue and tone at an absolute chroma.
    #[must_use]
    pub fn with_chroma(self, chroma: f64) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// Convert to an 8-bit sRGB color (clamping out-of-gamut channels).
    pub fn to_rgb(self) -> Rgb {
        Rgb::from(self)
    }

    /// Convert to `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl From<Lab> for Hct {
    fn from(lab: Lab) -> Self {
        let chroma = (lab.a * lab.a + lab.b * lab.b).sqrt() * CHROMA_SCALE;
        // atan2(0, 0) is 0, so achromatic colors get hue 0
        let hue = lab.b.atan2(lab.a).to_degrees();
        Self::new(hue, chroma, lab.l)
    }
}

impl From<Hct> for Lab {
    fn from(hct: Hct) -> Self {
        let chroma = hct.chroma / CHROMA_SCALE;
        let radians = hct.hue.to_radians();
        Lab::new(hct.tone, chroma * radians.cos(), chroma * radians.sin())
    }
}

impl From<Rgb> for Hct {
    fn from(rgb: Rgb) -> Self {
        Hct::from(Lab::from(Xyz::from(LinearRgb::from(rgb))))
    }
}

impl From<Hct> for Rgb {
    fn from(hct: Hct) -> Self {
        Rgb::from(LinearRgb::from(Xyz::from(Lab::from(hct))))
    }
}

/// Convert an 8-bit color to HCT.
pub fn rgb_to_hct(rgb: Rgb) -> Hct {
    Hct::from(rgb)
}

/// Convert HCT to an 8-bit color, clamping out-of-gamut channels.
pub fn hct_to_rgb(hct: Hct) -> Rgb {
    Rgb::from(hct)
}
