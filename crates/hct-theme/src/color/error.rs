//! Error type for the hex color codec.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly six hexadecimal digits (with an
/// optional leading `#`). Callers that want a fallback color must handle
/// this explicitly; the codec never substitutes a default.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 6 characters after stripping '#')
    InvalidLength {
        /// Number of characters found after stripping '#'
        found: usize,
    },
    /// A character outside `0-9a-fA-F` was encountered
    InvalidDigit,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { found } => {
                write!(
                    f,
                    "invalid color format: expected 6 hex digits, found {} characters",
                    found
                )
            }
            ParseColorError::InvalidDigit => {
                write!(f, "invalid color format: non-hexadecimal character")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
