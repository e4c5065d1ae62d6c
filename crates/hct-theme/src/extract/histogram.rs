//! Quantized color histogram.

use std::collections::HashMap;

use crate::color::Rgb;

/// Pixel counts per quantized RGB bucket.
///
/// Buckets remember the order in which they were first seen so that
/// [`PixelHistogram::into_ranked`] breaks count ties deterministically
/// (earlier-seen first) regardless of hash iteration order.
#[derive(Debug, Clone)]
pub struct PixelHistogram {
    bucket_size: u8,
    index: HashMap<Rgb, usize>,
    entries: Vec<(Rgb, u32)>,
}

impl PixelHistogram {
    /// Create an empty histogram with the given bucket width (1 disables
    /// quantization; 0 is treated as 1).
    pub fn new(bucket_size: u8) -> Self {
        Self {
            bucket_size: bucket_size.max(1),
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Snap each channel down to its bucket: `floor(c / size) * size`.
    #[inline]
    pub fn quantize(&self, r: u8, g: u8, b: u8) -> Rgb {
        let size = self.bucket_size;
        Rgb::new(r / size * size, g / size * size, b / size * size)
    }

    /// Count one pixel.
    pub fn add(&mut self, r: u8, g: u8, b: u8) {
        let key = self.quantize(r, g, b);
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct buckets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for the bucket containing `(r, g, b)`.
    pub fn count(&self, r: u8, g: u8, b: u8) -> u32 {
        let key = self.quantize(r, g, b);
        self.index.get(&key).map_or(0, |&i| self.entries[i].1)
    }

    /// Buckets sorted by descending count; ties keep first-seen order.
    pub fn into_ranked(self) -> Vec<(Rgb, u32)> {
        let mut entries = self.entries;
        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
