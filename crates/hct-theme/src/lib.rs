#![allow(clippy::module_inception, clippy::manual_range_contains)]

//! hct-theme: seed-color theming for user interfaces
//!
//! Derives accessible light and dark color schemes from a single seed color,
//! or from a wallpaper image by first picking a seed out of its pixels.
//!
//! # Quick Start
//!
//! ```
//! use hct_theme::{ColorRole, Theme};
//!
//! let theme = Theme::from_hex("#6750A4").unwrap();
//! assert_eq!(theme.light.get(ColorRole::Primary).to_hex(), "#6750A4");
//! assert_eq!(theme.dark.iter().count(), 28);
//! ```
//!
//! # From Pixels
//!
//! [`SeedExtractor`] reduces RGBA pixels to distinct candidates and scores
//! them:
//!
//! ```
//! use hct_theme::{RgbaImage, SeedExtractor, Theme};
//!
//! let data = [0x33, 0x66, 0x99, 0xFF].repeat(16);
//! let image = RgbaImage::new(4, 4, &data).unwrap();
//!
//! let (theme, extraction) = Theme::from_image(&image, &SeedExtractor::default());
//! assert_eq!(theme.seed, extraction.primary);
//! ```
//!
//! # Color Spaces
//!
//! - [`Rgb`]: 8-bit sRGB, the only textual form (`#RRGGBB`)
//! - [`LinearRgb`]: gamma-decoded light intensity
//! - [`Xyz`] / [`Lab`]: CIE D65 intermediates
//! - [`Hct`]: hue, chroma, tone derived from Lab
//!
//! ## Pipeline Overview
//!
//! ```text
//! Rgb  --gamma decode-->  LinearRgb  --matrix-->  Xyz  --f(t)-->  Lab
//!                                                                  |
//!                          hue = atan2(b, a), chroma = |ab| * 0.8, tone = L
//!                                                                  v
//!                                                                 Hct
//! ```
//!
//! HCT here is a simplified Lab-based approximation, not the CAM16 model.
//! Tone is Lab lightness; chroma is scaled Lab chroma. Conversions clamp
//! out-of-gamut results per channel rather than searching for the nearest
//! in-gamut color.
//!
//! # Accessibility
//!
//! Every `on*` role is black or white, whichever reaches a WCAG contrast of
//! 4.5 against its background (see [`accessible_text_color`]).

pub mod api;
pub mod color;
pub mod contrast;
pub mod extract;
pub mod palette;
pub mod scheme;


pub use api::{CorePalettes, EngineError, Extraction, SeedExtractor, Theme};
pub use color::{
    hct_to_rgb, hex_to_rgb, rgb_to_hct, rgb_to_hex, Hct, Lab, LinearRgb, ParseColorError, Rgb,
    Xyz,
};
pub use contrast::{
    accessible_text_color, accessible_text_color_hex, contrast_ratio, contrast_ratio_hex,
    relative_luminance, WCAG_AA_NORMAL,
};
pub use extract::{
    extract_colors, extract_colors_from_pixels, extract_primary_color, score_seed, ExtractOptions,
    PixelDataError, RgbaImage, DEFAULT_SEED,
};
pub use self::palette::{generate_tonal_palette, TonalPalette, TONE_STOPS};
pub use scheme::{
    generate_scheme_from_color, generate_scheme_from_hex, ColorRole, Mode, Scheme,
    UnknownRoleError,
};
