//! Unified error type for the hct-theme public API.
//!
//! [`EngineError`] wraps the crate's input errors into a single enum for
//! convenient `?` propagation in application code.

use crate::color::ParseColorError;
use crate::extract::PixelDataError;
use std::fmt;

/// Unified error type for the hct-theme public API.
///
/// # Example
///
/// ```
/// use hct_theme::{EngineError, Theme};
///
/// fn theme_for(seed: &str) -> Result<Theme, EngineError> {
///     let theme = Theme::from_hex(seed)?;
///     Ok(theme)
/// }
///
/// assert!(theme_for("#6750A4").is_ok());
/// assert!(theme_for("purple").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Seed or color argument is not `#RRGGBB`
    ParseColor(ParseColorError),
    /// RGBA buffer does not match its dimensions
    PixelData(PixelDataError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ParseColor(err) => write!(f, "color parse error: {}", err),
            EngineError::PixelData(err) => write!(f, "pixel data error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::ParseColor(err) => Some(err),
            EngineError::PixelData(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for EngineError {
    fn from(err: ParseColorError) -> Self {
        EngineError::ParseColor(err)
    }
}

impl From<PixelDataError> for EngineError {
    fn from(err: PixelDataError) -> Self {
        EngineError::PixelData(err)
    }
}
