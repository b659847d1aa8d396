//! Unified error type for the palette-map public API.
//!
//! [`MapError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::mapper::UnknownStrategyError;
use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the palette-map public API.
///
/// # Example
///
/// ```
/// use palette_map::{MapError, Palette, Remapper};
///
/// fn build(name: &str) -> Result<Remapper, MapError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Remapper::with_strategy_name(palette, name)
/// }
///
/// assert!(build("nn").is_ok());
/// assert!(build("xyz").is_err());
/// ```
#[derive(Debug)]
pub enum MapError {
    /// Palette construction error (an entry failed to parse)
    Palette(PaletteError),
    /// Requested strategy is not registered
    UnknownStrategy(UnknownStrategyError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Palette(err) => write!(f, "palette error: {}", err),
            MapError::UnknownStrategy(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Palette(err) => Some(err),
            MapError::UnknownStrategy(err) => Some(err),
        }
    }
}

impl From<PaletteError> for MapError {
    fn from(err: PaletteError) -> Self {
        MapError::Palette(err)
    }
}

impl From<UnknownStrategyError> for MapError {
    fn from(err: UnknownStrategyError) -> Self {
        MapError::UnknownStrategy(err)
    }
}
