//! Fixed-stop tonal palettes.

use crate::color::{Hct, Rgb};

/// Tone stops of every [`TonalPalette`], in order.
pub const TONE_STOPS: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// Thirteen colors sharing one hue and chroma, one per [`TONE_STOPS`] entry.
///
/// Colors that fall outside sRGB at extreme tones are clamped per channel,
/// so the hue of the clamped output may drift slightly at tones 0-10 and
/// 95-100.
///
/// # Example
///
/// ```
/// use hct_theme::{Hct, Rgb, TonalPalette};
///
/// let seed = Rgb::new(0x67, 0x50, 0xA4);
/// let palette = TonalPalette::from_hct(Hct::from(seed));
/// assert_eq!(palette.len(), 13);
/// assert_eq!(palette.tone(40), Some(seed));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    colors: [Rgb; 13],
}

impl TonalPalette {
    /// Build the palette for `source`'s hue and chroma. Its tone is ignored.
    pub fn from_hct(source: Hct) -> Self {
        let colors = TONE_STOPS.map(|tone| source.with_tone(f64::from(tone)).to_rgb());
        Self {
            hue: source.hue(),
            chroma: source.chroma(),
            colors,
        }
    }

    /// Shared hue of every entry.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Shared chroma of every entry.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Color at an exact stop, `None` if `tone` is not one of [`TONE_STOPS`].
    pub fn tone(&self, tone: u8) -> Option<Rgb> {
        TONE_STOPS
            .iter()
            .position(|&stop| stop == tone)
            .map(|idx| self.colors[idx])
    }

    /// All 13 colors in stop order.
    pub fn colors(&self) -> &[Rgb; 13] {
        &self.colors
    }

    /// `(stop, color)` pairs in stop order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Rgb)> + '_ {
        TONE_STOPS.iter().copied().zip(self.colors.iter().copied())
    }

    /// Always 13.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// The palette as `#RRGGBB` strings in stop order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

/// Generate the 13-entry tonal palette for `hct`'s hue and chroma.
pub fn generate_tonal_palette(hct: Hct) -> TonalPalette {
    TonalPalette::from_hct(hct)
}
