//! Public API for the hct-theme crate.
//!
//! This module provides the high-level API: [`Theme`], the
//! [`SeedExtractor`] builder and the [`EngineError`] unified error type.

mod builder;
mod error;
mod theme;

pub use builder::{Extraction, SeedExtractor};
pub use error::EngineError;
pub use theme::{CorePalettes, Theme};
