//! Material-style color schemes
//!
//! A [`Scheme`] maps each of the 28 [`ColorRole`]s to one color. It is
//! derived from a single seed:
//!
//! | Family | Derivation |
//! |--------|------------|
//! | primary | the seed; container at the mode's container tone |
//! | secondary | seed hue + 60°, at the mode's base tone; container +10 |
//! | tertiary | seed hue + 120°, at the mode's base tone; container +10 |
//! | surface | seed chroma − 40 at tone 99 (light) / 10 (dark), fixed deltas per tier |
//! | outline | seed hue and chroma at fixed tones |
//! | error | fixed literals per mode |
//! | on-* | black or white, whichever [`accessible_text_color`](crate::accessible_text_color) picks |

mod role;
#[allow(clippy::module_inception)]
mod scheme;
pub mod tones;

pub use role::{ColorRole, UnknownRoleError};
pub use scheme::{generate_scheme_from_color, generate_scheme_from_hex, Scheme};
pub use tones::Mode;
