//! Wallpaper seed extraction
//!
//! Reduces an RGBA image to a short list of frequent, mutually distinct
//! colors and picks the one best suited as a scheme seed:
//!
//! 1. **Downsample** to [`ExtractOptions::sample_width`] columns
//! 2. **Skip** pixels below [`ExtractOptions::alpha_threshold`]
//! 3. **Quantize** channels into [`ExtractOptions::bucket_size`] steps and
//!    count them in a [`PixelHistogram`]
//! 4. **Rank** buckets by count and keep the top `2k`
//! 5. **Filter** candidates whose contrast ratio against any kept color is
//!    not above [`ExtractOptions::distinct_contrast`]
//! 6. **Score** the survivors with [`extract_primary_color`]
//!
//! # Example
//!
//! ```
//! use hct_theme::{extract_colors_from_pixels, extract_primary_color, RgbaImage};
//!
//! let data = [0x33, 0x66, 0x99, 0xFF].repeat(16);
//! let image = RgbaImage::new(4, 4, &data).unwrap();
//!
//! let colors = extract_colors_from_pixels(&image, 5);
//! assert_eq!(colors.len(), 1);
//! assert_eq!(extract_primary_color(&colors).to_hex(), "#306090");
//! ```

mod histogram;
mod image;
mod options;
mod resize;
mod score;

pub use histogram::PixelHistogram;
pub use image::{PixelDataError, RgbaImage};
pub use options::{
    ExtractOptions, DEFAULT_ALPHA_THRESHOLD, DEFAULT_BUCKET_SIZE, DEFAULT_CANDIDATES,
    DEFAULT_DISTINCT_CONTRAST, DEFAULT_SAMPLE_WIDTH,
};
pub use resize::resize_nearest;
pub use score::{extract_primary_color, score_seed, DEFAULT_SEED};

use crate::color::Rgb;
use crate::contrast::contrast_ratio;

/// Extract up to `k` distinct frequent colors using default options.
///
/// Returns fewer than `k` colors when the image lacks distinct-enough
/// colors, and none when every pixel is transparent or the image is empty.
pub fn extract_colors_from_pixels(image: &RgbaImage<'_>, k: usize) -> Vec<Rgb> {
    extract_colors(image, &ExtractOptions::new().candidates(k))
}

/// Extract distinct frequent colors with explicit options.
pub fn extract_colors(image: &RgbaImage<'_>, options: &ExtractOptions) -> Vec<Rgb> {
    let k = options.candidates;
    if k == 0 {
        return Vec::new();
    }

    let histogram = build_histogram(image, options);
    let ranked = histogram.into_ranked();

    // k may exceed the bucket count by any amount
    let mut kept: Vec<Rgb> = Vec::with_capacity(k.min(ranked.len()));
    for (candidate, _) in ranked.into_iter().take(k.saturating_mul(2)) {
        let distinct = kept
            .iter()
            .all(|&other| contrast_ratio(candidate, other) > options.distinct_contrast);
        if distinct {
            kept.push(candidate);
            if kept.len() == k {
                break;
            }
        }
    }
    kept
}

/// Downsample, drop transparent pixels and count quantized colors.
pub fn build_histogram(image: &RgbaImage<'_>, options: &ExtractOptions) -> PixelHistogram {
    let (pixels, _, _) = resize_nearest(image, options.sample_width);
    let mut histogram = PixelHistogram::new(options.bucket_size);
    for [r, g, b, a] in pixels {
        if a < options.alpha_threshold {
            continue;
        }
        histogram.add(r, g, b);
    }
    histogram
}
