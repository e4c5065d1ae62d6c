//! Nearest-neighbour downsampling.
//!
//! Extraction only needs a color histogram, so sampling at pixel centres is
//! enough and keeps source colors intact (no blended in-between colors as a
//! filtering resampler would produce).

use super::image::RgbaImage;

/// Downsample `image` to `target_width` columns, preserving aspect ratio.
///
/// Images already at or below `target_width` are returned at their own size.
/// The output height is `round(height * target_width / width)`, at least 1.
///
/// Returns `(pixels, width, height)` with pixels row-major.
pub fn resize_nearest(image: &RgbaImage<'_>, target_width: u32) -> (Vec<[u8; 4]>, u32, u32) {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return (Vec::new(), 0, 0);
    }

    let (new_width, new_height) = if target_width == 0 || width <= target_width {
        (width, height)
    } else {
        let h = (f64::from(height) * f64::from(target_width) / f64::from(width)).round() as u32;
        (target_width, h.max(1))
    };

    let mut pixels = Vec::with_capacity(new_width as usize * new_height as usize);
    for y in 0..new_height {
        let sy = source_index(y, new_height, height);
        for x in 0..new_width {
            let sx = source_index(x, new_width, width);
            pixels.push(image.pixel(sx, sy));
        }
    }

    (pixels, new_width, new_height)
}

/// Source coordinate whose cell contains the centre of destination cell `i`.
#[inline]
fn source_index(i: u32, dst_len: u32, src_len: u32) -> u32 {
    let centre = (f64::from(i) + 0.5) * f64::from(src_len) / f64::from(dst_len);
    (centre as u32).min(src_len - 1)
}
