//! Public API for the palette-map crate.
//!
//! This module provides the high-level API: [`Remapper`] builder and
//! [`MapError`] unified error type.

mod builder;
mod error;

pub use builder::Remapper;
pub use error::MapError;
