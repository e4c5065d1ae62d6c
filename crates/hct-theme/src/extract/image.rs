//! Borrowed RGBA pixel buffers.

use std::fmt;

/// Error returned when a pixel buffer does not match its declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelDataError {
    /// Buffer length is not `width * height * 4`
    LengthMismatch {
        width: u32,
        height: u32,
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
    /// `width * height * 4` does not fit in memory
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for PixelDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelDataError::LengthMismatch {
                width,
                height,
                expected,
                actual,
            } => write!(
                f,
                "pixel buffer for {}x{} RGBA needs {} bytes, got {}",
                width, height, expected, actual
            ),
            PixelDataError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for PixelDataError {}

/// A row-major RGBA8 image borrowed from the caller.
///
/// Validated on construction, so the extraction pipeline never indexes out
/// of bounds.
///
/// # Example
///
/// ```
/// use hct_theme::RgbaImage;
///
/// let data = vec![255u8; 2 * 2 * 4];
/// let image = RgbaImage::new(2, 2, &data).unwrap();
/// assert_eq!(image.pixel(1, 1), [255, 255, 255, 255]);
///
/// assert!(RgbaImage::new(3, 2, &data).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbaImage<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RgbaImage<'a> {
    /// Wrap `data`, which must hold exactly `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, PixelDataError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PixelDataError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(PixelDataError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// `[R, G, B, A]` at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        let data = [0u8; 7];
        let err = RgbaImage::new(1, 2, &data).unwrap_err();
        assert_eq!(
            err,
            PixelDataError::LengthMismatch {
                width: 1,
                height: 2,
                expected: 8,
                actual: 7
            }
        );
        assert_eq!(
            err.to_string(),
            "pixel buffer for 1x2 RGBA needs 8 bytes, got 7"
        );
    }

    #[test]
    fn test_empty_image_is_valid() {
        let image = RgbaImage::new(0, 10, &[]).unwrap();
        assert!(image.is_empty());
    }

    #[test]
    fn test_pixel_row_major() {
        let data = [
            1, 2, 3, 4, 5, 6, 7, 8, // row 0
            9, 10, 11, 12, 13, 14, 15, 16, // row 1
        ];
        let image = RgbaImage::new(2, 2, &data).unwrap();
        assert_eq!(image.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(image.pixel(0, 1), [9, 10, 11, 12]);
    }
}
