//! Tonal palettes
//!
//! A tonal palette fixes hue and chroma and sweeps tone across thirteen
//! stops. Scheme generation picks individual tones from the same sweep.

mod tonal;

pub use tonal::{generate_tonal_palette, TonalPalette, TONE_STOPS};
