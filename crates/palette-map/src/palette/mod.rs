//! Palette types and utilities
//!
//! This module provides the ordered [`Palette`] with its nearest-color
//! lookup, and the error types for hex parsing.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
