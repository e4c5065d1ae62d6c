//! Seed suitability scoring.
//!
//! Favors moderately colorful, mid-tone candidates and penalizes grays and
//! near-black/near-white. Weights are heuristic.

use crate::color::{Hct, Rgb};

/// Seed used when there is nothing to choose from (`#6750A4`).
pub const DEFAULT_SEED: Rgb = Rgb::new(0x67, 0x50, 0xA4);

const CHROMA_BONUS: i32 = 30;
const TONE_BONUS: i32 = 30;
const SATURATION_BONUS: i32 = 20;
const GRAY_PENALTY: i32 = -50;
const EXTREME_TONE_PENALTY: i32 = -30;

/// Channels closer than this count as gray.
const GRAY_CHANNEL_SPREAD: i32 = 30;

/// Heuristic seed score for one candidate.
pub fn score_seed(color: Rgb) -> i32 {
    let hct = Hct::from(color);
    let mut score = 0;

    if hct.chroma() > 20.0 && hct.chroma() < 60.0 {
        score += CHROMA_BONUS;
    }
    if hct.tone() > 30.0 && hct.tone() < 70.0 {
        score += TONE_BONUS;
    }
    let saturation = color.saturation();
    if saturation > 0.3 && saturation < 0.8 {
        score += SATURATION_BONUS;
    }

    let (r, g, b) = (i32::from(color.r), i32::from(color.g), i32::from(color.b));
    if (r - g).abs() < GRAY_CHANNEL_SPREAD && (g - b).abs() < GRAY_CHANNEL_SPREAD {
        score += GRAY_PENALTY;
    }
    if hct.tone() < 10.0 || hct.tone() > 90.0 {
        score += EXTREME_TONE_PENALTY;
    }

    score
}

/// Pick the best seed among `colors`.
///
/// Returns [`DEFAULT_SEED`] when `colors` is empty. On equal scores the
/// earlier candidate (higher pixel frequency) wins.
pub fn extract_primary_color(colors: &[Rgb]) -> Rgb {
    let mut best: Option<(Rgb, i32)> = None;
    for &color in colors {
        let score = score_seed(color);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((color, score)),
        }
    }
    best.map_or(DEFAULT_SEED, |(color, _)| color)
}
