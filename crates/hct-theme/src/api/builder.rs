//! SeedExtractor builder: the entry point for wallpaper-driven theming.
//!
//! [`SeedExtractor`] wraps the extraction pipeline with fluent
//! configuration and returns both the candidates and the chosen seed.

use crate::color::Rgb;
use crate::extract::{extract_colors, extract_primary_color, ExtractOptions, RgbaImage};

use super::error::EngineError;

/// Outcome of one extraction: distinct candidates in frequency order plus
/// the seed picked from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Up to `k` mutually distinct colors, most frequent first
    pub candidates: Vec<Rgb>,
    /// Highest-scoring candidate, or the default seed when there are none
    pub primary: Rgb,
}

/// High-level seed extraction builder.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`extract()`](Self::extract) takes `&self` so one extractor can serve
///   many images
///
/// # Example
///
/// ```
/// use hct_theme::{RgbaImage, SeedExtractor};
///
/// let data = [0x33, 0x66, 0x99, 0xFF].repeat(4);
/// let image = RgbaImage::new(2, 2, &data).unwrap();
///
/// let extraction = SeedExtractor::default().candidates(3).extract(&image);
/// assert_eq!(extraction.candidates.len(), 1);
/// assert_eq!(extraction.primary, extraction.candidates[0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeedExtractor {
    options: ExtractOptions,
}

impl SeedExtractor {
    /// Create an extractor with explicit options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Set the number of candidates to keep.
    #[inline]
    pub fn candidates(mut self, k: usize) -> Self {
        self.options = self.options.candidates(k);
        self
    }

    /// Set the downsample width.
    #[inline]
    pub fn sample_width(mut self, width: u32) -> Self {
        self.options = self.options.sample_width(width);
        self
    }

    /// Set the minimum alpha for a pixel to count.
    #[inline]
    pub fn alpha_threshold(mut self, alpha: u8) -> Self {
        self.options = self.options.alpha_threshold(alpha);
        self
    }

    /// Options in effect.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract candidates from `image` and pick the seed.
    pub fn extract(&self, image: &RgbaImage<'_>) -> Extraction {
        let candidates = extract_colors(image, &self.options);
        let primary = extract_primary_color(&candidates);
        Extraction {
            candidates,
            primary,
        }
    }

    /// Validate a raw RGBA buffer and extract from it.
    pub fn extract_rgba(
        &self,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<Extraction, EngineError> {
        let image = RgbaImage::new(width, height, data)?;
        Ok(self.extract(&image))
    }
}
