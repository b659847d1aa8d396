//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette loading.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or a non-hexadecimal character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#').
    /// Carries the length that was found.
    InvalidLength(usize),
    /// Invalid hexadecimal character encountered
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 3 or 6 characters)",
                    len
                )
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction.
///
/// Returned when one entry of a hex palette cannot be parsed. The whole
/// palette is rejected; no partial palette is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Invalid hex color string
    ParseColor {
        /// Position of the offending entry
        index: usize,
        /// The entry as written
        entry: String,
        /// Why it was rejected
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::ParseColor {
                index,
                entry,
                source,
            } => {
                write!(f, "invalid color {:?} at index {}: {}", entry, index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
        }
    }
}
