//! Wallpaper image acquisition.
//!
//! Reads files with `tokio::fs`, fetches URLs with a blocking reqwest client
//! on the blocking pool, and decodes PNG to RGBA8. Decoding and extraction
//! also run on the blocking pool.

use hct_theme::{Extraction, RgbaImage, SeedExtractor};
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ImageError;
use crate::models::ExtractionConfig;

/// Decoded size cap, independent of the encoded size limit.
const MAX_DECODED_BYTES: usize = 256 * 1024 * 1024;

/// Where an image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Url(String),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// `http://` and `https://` arguments are URLs, everything else a path.
    pub fn parse(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            ImageSource::Url(arg.to_string())
        } else {
            ImageSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(path) => write!(f, "{}", path.display()),
            ImageSource::Url(url) => write!(f, "{url}"),
            ImageSource::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// RGBA8 pixels decoded from a PNG
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Borrow as a validated engine image
    pub fn as_image(&self) -> Result<RgbaImage<'_>, ImageError> {
        Ok(RgbaImage::new(self.width, self.height, &self.rgba)?)
    }
}

/// Loads and decodes wallpaper images
#[derive(Debug, Clone)]
pub struct ImageLoader {
    max_bytes: usize,
    fetch_timeout: Duration,
}

impl ImageLoader {
    pub fn new(max_bytes: usize, fetch_timeout: Duration) -> Self {
        Self {
            max_bytes,
            fetch_timeout,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.max_image_bytes, config.fetch_timeout())
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Read the encoded bytes of `source`, enforcing the size limit
    pub async fn read(&self, source: ImageSource) -> Result<Vec<u8>, ImageError> {
        match source {
            ImageSource::File(path) => self.read_file(path).await,
            ImageSource::Url(url) => self.fetch(url).await,
            ImageSource::Bytes(bytes) => {
                self.check_size(bytes.len())?;
                Ok(bytes)
            }
        }
    }

    /// Read and decode `source`
    pub async fn load(&self, source: ImageSource) -> Result<DecodedImage, ImageError> {
        let bytes = self.read(source).await?;
        tokio::task::spawn_blocking(move || decode_png(&bytes))
            .await
            .map_err(|e| ImageError::Task(format!("Decode task failed: {e}")))?
    }

    /// Read, decode and run seed extraction on `source`
    pub async fn extract(
        &self,
        source: ImageSource,
        extractor: &SeedExtractor,
    ) -> Result<Extraction, ImageError> {
        let label = source.to_string();
        let bytes = self.read(source).await?;
        let extractor = extractor.clone();

        let extraction = tokio::task::spawn_blocking(move || {
            let decoded = decode_png(&bytes)?;
            let image = decoded.as_image()?;
            Ok::<_, ImageError>(extractor.extract(&image))
        })
        .await
        .map_err(|e| ImageError::Task(format!("Extraction task failed: {e}")))??;

        tracing::debug!(
            source = %label,
            candidates = extraction.candidates.len(),
            primary = %extraction.primary,
            "Extracted seed from image"
        );
        Ok(extraction)
    }

    async fn read_file(&self, path: PathBuf) -> Result<Vec<u8>, ImageError> {
        let io_error = |source: std::io::Error| ImageError::Io {
            path: path.display().to_string(),
            source,
        };
        let metadata = tokio::fs::metadata(&path).await.map_err(io_error)?;
        self.check_size(usize::try_from(metadata.len()).unwrap_or(usize::MAX))?;

        let bytes = tokio::fs::read(&path).await.map_err(io_error)?;
        self.check_size(bytes.len())?;
        Ok(bytes)
    }

    async fn fetch(&self, url: String) -> Result<Vec<u8>, ImageError> {
        let timeout = self.fetch_timeout;
        let max_bytes = self.max_bytes;

        // reqwest::blocking must not run on the async runtime
        tokio::task::spawn_blocking(move || fetch_blocking(&url, timeout, max_bytes))
            .await
            .map_err(|e| ImageError::Task(format!("Fetch task failed: {e}")))?
    }

    fn check_size(&self, size: usize) -> Result<(), ImageError> {
        check_size(size, self.max_bytes)
    }
}

fn check_size(size: usize, max: usize) -> Result<(), ImageError> {
    if size > max {
        return Err(ImageError::TooLarge { size, max });
    }
    Ok(())
}

fn fetch_blocking(url: &str, timeout: Duration, max_bytes: usize) -> Result<Vec<u8>, ImageError> {
    tracing::debug!(url = %url, "Fetching image");

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ImageError::Fetch(format!("Failed to build HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| ImageError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %url, status = status.as_u16(), "Image fetch failed");
        return Err(ImageError::Status(status.as_u16()));
    }

    if let Some(length) = response.content_length() {
        check_size(usize::try_from(length).unwrap_or(usize::MAX), max_bytes)?;
    }

    let bytes = response
        .bytes()
        .map_err(|e| ImageError::Fetch(e.to_string()))?;
    check_size(bytes.len(), max_bytes)?;
    Ok(bytes.to_vec())
}

/// Decode a PNG into RGBA8, expanding palette, gray and 16-bit formats
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let mut decoder = png::Decoder::new_with_limits(
        Cursor::new(bytes),
        png::Limits {
            bytes: MAX_DECODED_BYTES,
        },
    );
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::Unsupported(format!(
            "{:?} bit depth after expansion",
            info.bit_depth
        )));
    }

    let data = &buf[..info.buffer_size()];
    let rgba = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(ImageError::Unsupported(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        rgba,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(
            ImageSource::parse("https://example.com/a.png"),
            ImageSource::Url("https://example.com/a.png".to_string())
        );
        assert_eq!(
            ImageSource::parse("wallpaper.png"),
            ImageSource::File(PathBuf::from("wallpaper.png"))
        );
    }

    #[test]
    fn test_decode_rgb_adds_opaque_alpha() {
        let png = encode(2, 1, png::ColorType::Rgb, &[255, 0, 0, 0, 0, 255]);
        let decoded = decode_png(&png).unwrap();
        assert_eq!((decoded.width, decoded.height), (2, 1));
        assert_eq!(decoded.rgba, vec![255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_decode_gray_alpha() {
        let png = encode(1, 1, png::ColorType::GrayscaleAlpha, &[100, 7]);
        assert_eq!(decode_png(&png).unwrap().rgba, vec![100, 100, 100, 7]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_png(b"definitely not a png");
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[tokio::test]
    async fn test_bytes_over_limit() {
        let loader = ImageLoader::new(4, Duration::from_secs(1));
        let result = loader.read(ImageSource::Bytes(vec![0; 5])).await;
        assert!(matches!(
            result,
            Err(ImageError::TooLarge { size: 5, max: 4 })
        ));
    }

    #[tokio::test]
    async fn test_extract_from_bytes() {
        let data = [0x33, 0x66, 0x99, 0xFF].repeat(16);
        let png = encode(4, 4, png::ColorType::Rgba, &data);
        let loader = ImageLoader::new(1024 * 1024, Duration::from_secs(1));

        let extraction = loader
            .extract(ImageSource::Bytes(png), &SeedExtractor::default())
            .await
            .unwrap();
        assert_eq!(extraction.primary.to_hex(), "#306090");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let loader = ImageLoader::new(1024, Duration::from_secs(1));
        let result = loader
            .load(ImageSource::File(PathBuf::from("/nonexistent/wallpaper.png")))
            .await;
        assert!(matches!(result, Err(ImageError::Io { .. })));
    }
}
