//! Extraction options and configuration.

/// Default number of distinct colors to extract.
pub const DEFAULT_CANDIDATES: usize = 5;

/// Width images are downsampled to before sampling.
pub const DEFAULT_SAMPLE_WIDTH: u32 = 100;

/// Pixels with alpha below this are skipped.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Width of each per-channel quantization bucket.
pub const DEFAULT_BUCKET_SIZE: u8 = 16;

/// A candidate is kept only if its contrast ratio against every kept color
/// exceeds this. Heuristic; keep the literal.
pub const DEFAULT_DISTINCT_CONTRAST: f64 = 1.5;

/// Configuration for wallpaper color extraction.
///
/// # Defaults
///
/// - Candidates: 5
/// - Sample width: 100 (aspect ratio preserved)
/// - Alpha threshold: 128
/// - Bucket size: 16
/// - Distinct contrast: 1.5
///
/// # Example
///
/// ```
/// use hct_theme::ExtractOptions;
///
/// let options = ExtractOptions::new().candidates(8).alpha_threshold(200);
/// assert_eq!(options.candidates, 8);
/// assert_eq!(options.sample_width, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Maximum number of colors returned (`k`). The histogram is cut to the
    /// top `2k` buckets before the distinctness filter.
    pub candidates: usize,

    /// Width to downsample to before reading pixels.
    pub sample_width: u32,

    /// Minimum alpha for a pixel to count.
    pub alpha_threshold: u8,

    /// Per-channel quantization step.
    pub bucket_size: u8,

    /// Minimum pairwise contrast ratio between kept colors (exclusive).
    pub distinct_contrast: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES,
            sample_width: DEFAULT_SAMPLE_WIDTH,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            bucket_size: DEFAULT_BUCKET_SIZE,
            distinct_contrast: DEFAULT_DISTINCT_CONTRAST,
        }
    }
}

impl ExtractOptions {
    /// Same as [`ExtractOptions::default()`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of colors to extract.
    #[inline]
    pub fn candidates(mut self, k: usize) -> Self {
        self.candidates = k;
        self
    }

    /// Set the downsample width.
    #[inline]
    pub fn sample_width(mut self, width: u32) -> Self {
        self.sample_width = width;
        self
    }

    /// Set the minimum alpha.
    #[inline]
    pub fn alpha_threshold(mut self, alpha: u8) -> Self {
        self.alpha_threshold = alpha;
        self
    }

    /// Set the quantization step.
    #[inline]
    pub fn bucket_size(mut self, size: u8) -> Self {
        self.bucket_size = size;
        self
    }

    /// Set the distinctness contrast threshold.
    #[inline]
    pub fn distinct_contrast(mut self, ratio: f64) -> Self {
        self.distinct_contrast = ratio;
        self
    }
}
