//! Complete theme from one seed.

use crate::color::{Hct, ParseColorError, Rgb};
use crate::palette::TonalPalette;
use crate::scheme::tones::{SECONDARY_HUE_SHIFT, SURFACE_CHROMA_REDUCTION, TERTIARY_HUE_SHIFT};
use crate::scheme::Scheme;

use super::builder::{Extraction, SeedExtractor};
use crate::extract::RgbaImage;

/// Tonal palettes for the seed's hue families.
///
/// Secondary and tertiary use the same hue rotations as the scheme; neutral
/// uses the reduced surface chroma.
#[derive(Debug, Clone, PartialEq)]
pub struct CorePalettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
}

impl CorePalettes {
    pub fn from_seed(seed: Rgb) -> Self {
        let hct = Hct::from(seed);
        Self {
            primary: TonalPalette::from_hct(hct),
            secondary: TonalPalette::from_hct(hct.adjust_hue(SECONDARY_HUE_SHIFT)),
            tertiary: TonalPalette::from_hct(hct.adjust_hue(TERTIARY_HUE_SHIFT)),
            neutral: TonalPalette::from_hct(hct.adjust_chroma(-SURFACE_CHROMA_REDUCTION)),
        }
    }
}

/// Light and dark schemes plus core palettes for one seed.
///
/// # Example
///
/// ```
/// use hct_theme::{ColorRole, Theme};
///
/// let theme = Theme::from_hex("#6750A4").unwrap();
/// assert!(!theme.light.is_dark());
/// assert!(theme.dark.is_dark());
/// assert_eq!(theme.light.get(ColorRole::Primary), theme.seed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub seed: Rgb,
    pub light: Scheme,
    pub dark: Scheme,
    pub palettes: CorePalettes,
}

impl Theme {
    pub fn from_seed(seed: Rgb) -> Self {
        Self {
            seed,
            light: Scheme::from_seed(seed, false),
            dark: Scheme::from_seed(seed, true),
            palettes: CorePalettes::from_seed(seed),
        }
    }

    pub fn from_hex(seed: &str) -> Result<Self, ParseColorError> {
        Ok(Self::from_seed(seed.parse()?))
    }

    /// Extract a seed from `image` and build its theme.
    ///
    /// Also returns the extraction so callers can show the candidates.
    pub fn from_image(image: &RgbaImage<'_>, extractor: &SeedExtractor) -> (Self, Extraction) {
        let extraction = extractor.extract(image);
        (Self::from_seed(extraction.primary), extraction)
    }

    /// Scheme for the requested mode.
    pub fn scheme(&self, is_dark: bool) -> &Scheme {
        if is_dark {
            &self.dark
        } else {
            &self.light
        }
    }
}
