//! Tone targets and deltas for scheme generation.
//!
//! All values are empirical. The surface deltas are listed per role and per
//! mode rather than derived from one another.

use crate::color::Rgb;

/// Light or dark variant of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    #[inline]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Mode::Dark
        } else {
            Mode::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }
}

/// Hue rotation from the seed to the secondary family.
pub const SECONDARY_HUE_SHIFT: f64 = 60.0;

/// Hue rotation from the seed to the tertiary family.
pub const TERTIARY_HUE_SHIFT: f64 = 120.0;

/// Secondary/tertiary containers sit this far above their base tone.
pub const CONTAINER_TONE_OFFSET: f64 = 10.0;

/// Chroma removed from the seed for the surface family (floored at 0).
pub const SURFACE_CHROMA_REDUCTION: f64 = 40.0;

/// Per-mode tone targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneTargets {
    /// Tone of secondary and tertiary.
    pub base: f64,
    /// Tone of primaryContainer.
    pub container: f64,
    /// Tone of surface.
    pub surface: f64,
    pub outline: f64,
    pub outline_variant: f64,
    pub surface_deltas: SurfaceDeltas,
}

/// Tone offsets from the base surface tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDeltas {
    pub dim: f64,
    pub bright: f64,
    pub container_lowest: f64,
    pub container_low: f64,
    pub container: f64,
    pub container_high: f64,
    pub container_highest: f64,
}

pub const LIGHT_TONES: ToneTargets = ToneTargets {
    base: 80.0,
    container: 90.0,
    surface: 99.0,
    outline: 50.0,
    outline_variant: 80.0,
    surface_deltas: SurfaceDeltas {
        dim: -12.0,
        bright: 1.0,
        container_lowest: 1.0,
        container_low: -3.0,
        container: -5.0,
        container_high: -7.0,
        container_highest: -9.0,
    },
};

pub const DARK_TONES: ToneTargets = ToneTargets {
    base: 20.0,
    container: 30.0,
    surface: 10.0,
    outline: 60.0,
    outline_variant: 30.0,
    surface_deltas: SurfaceDeltas {
        dim: -4.0,
        bright: 22.0,
        container_lowest: -6.0,
        container_low: 4.0,
        container: 8.0,
        container_high: 12.0,
        container_highest: 16.0,
    },
};

impl ToneTargets {
    pub fn for_mode(mode: Mode) -> &'static ToneTargets {
        match mode {
            Mode::Light => &LIGHT_TONES,
            Mode::Dark => &DARK_TONES,
        }
    }
}

/// Seed-independent error family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorColors {
    pub error: Rgb,
    pub on_error: Rgb,
    pub error_container: Rgb,
    pub on_error_container: Rgb,
}

pub const LIGHT_ERROR: ErrorColors = ErrorColors {
    error: Rgb::new(0xB3, 0x26, 0x1E),
    on_error: Rgb::new(0xFF, 0xFF, 0xFF),
    error_container: Rgb::new(0xF9, 0xDE, 0xDC),
    on_error_container: Rgb::new(0x41, 0x0E, 0x0B),
};

pub const DARK_ERROR: ErrorColors = ErrorColors {
    error: Rgb::new(0xF2, 0xB8, 0xB5),
    on_error: Rgb::new(0x60, 0x14, 0x10),
    error_container: Rgb::new(0x8C, 0x1D, 0x18),
    on_error_container: Rgb::new(0xF9, 0xDE, 0xDC),
};

impl ErrorColors {
    pub fn for_mode(mode: Mode) -> &'static ErrorColors {
        match mode {
            Mode::Light => &LIGHT_ERROR,
            Mode::Dark => &DARK_ERROR,
        }
    }
}
