//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - [`Rgb`]: 8-bit sRGB, the interchange and hex codec type
//! - [`LinearRgb`]: linear light, the input to the XYZ matrix
//! - [`Xyz`] / [`Lab`]: CIE intermediates (D65)
//! - [`Hct`]: approximate Hue-Chroma-Tone used by scheme generation
//!
//! # Example
//!
//! ```
//! use hct_theme::{Hct, Rgb};
//!
//! let seed: Rgb = "#6750A4".parse().unwrap();
//! let hct = Hct::from(seed);
//! let lighter = hct.with_tone(90.0).to_rgb();
//! assert_ne!(lighter, seed);
//! ```

mod error;
mod hct;
mod lab;
mod linear_rgb;
mod rgb;

pub use error::ParseColorError;
pub use hct::{hct_to_rgb, rgb_to_hct, Hct, CHROMA_SCALE};
pub use lab::{Lab, Xyz, D65_WHITE, LAB_EPSILON, LAB_KAPPA};
pub use linear_rgb::LinearRgb;
pub use rgb::{hex_to_rgb, rgb_to_hex, Rgb};
