//! Palette mapping strategies.
//!
//! A strategy turns a source [`Raster`] into a new raster whose pixels come
//! from a palette. All strategies implement the [`Mapper`] trait and are
//! selected by name through the [`Strategy`] registry:
//!
//! | Key  | Strategy | Mapper |
//! |------|----------|--------|
//! | `nn` | [`Strategy::NearestNeighbor`] | [`NearestNeighbor`] |
//!
//! Adding a strategy means adding a variant, an entry in [`Strategy::ALL`]
//! and a [`Mapper`] implementation. Callers keep using
//! [`Strategy::from_name`] and [`Mapper::process`].
//!
//! # Example
//!
//! ```
//! use palette_map::{Color, MapOptions, Palette, Raster, Strategy};
//!
//! let palette = Palette::from_hex(&["#000", "#fff"]).unwrap();
//! let strategy = Strategy::from_name("nn").unwrap();
//! let mapper = strategy.mapper(palette, &MapOptions::new());
//!
//! let image = Raster::filled(1, 1, Color::from_u8(10, 10, 10));
//! assert_eq!(mapper.process(&image).get(0, 0), Some(Color::from_u8(0, 0, 0)));
//! ```

mod error;
mod nearest;
mod options;

pub use error::UnknownStrategyError;
pub use nearest::NearestNeighbor;
pub use options::MapOptions;

use std::fmt;
use std::str::FromStr;

use crate::palette::Palette;
use crate::raster::Raster;

/// A pixel transformation that maps an image onto a palette.
///
/// Implementations must be pure: the source raster is only borrowed and the
/// result is a newly allocated raster with the same dimensions.
pub trait Mapper {
    /// Registry key of this strategy.
    fn name(&self) -> &'static str;

    /// Map every pixel of `image` and return the new image.
    fn process(&self, image: &Raster) -> Raster;
}

/// Registered mapping strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Replace each pixel with the nearest palette color (Euclidean RGB).
    #[default]
    NearestNeighbor,
}

impl Strategy {
    /// Every registered strategy, in listing order.
    pub const ALL: &'static [Strategy] = &[Strategy::NearestNeighbor];

    /// Registry key used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::NearestNeighbor => "nn",
        }
    }

    /// One-line human readable description.
    pub fn description(self) -> &'static str {
        match self {
            Strategy::NearestNeighbor => {
                "nearest palette color by Euclidean RGB distance (first entry wins ties)"
            }
        }
    }

    /// Look up a strategy by its registry key.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStrategyError`] if no strategy has that key.
    pub fn from_name(name: &str) -> Result<Self, UnknownStrategyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or_else(|| UnknownStrategyError::new(name))
    }

    /// Build the mapper for this strategy.
    pub fn mapper(self, palette: Palette, options: &MapOptions) -> Box<dyn Mapper> {
        match self {
            Strategy::NearestNeighbor => Box::new(NearestNeighbor::new(palette, options.clone())),
        }
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nearest_neighbor() {
        assert_eq!(Strategy::default(), Strategy::NearestNeighbor);
        assert_eq!(Strategy::default().name(), "nn");
    }

    #[test]
    fn test_lookup_registered_name() {
        assert_eq!(Strategy::from_name("nn"), Ok(Strategy::NearestNeighbor));
        assert_eq!("nn".parse::<Strategy>(), Ok(Strategy::NearestNeighbor));
    }

    #[test]
    fn test_lookup_unknown_name() {
        let err = Strategy::from_name("xyz").unwrap_err();
        assert_eq!(err.name, "xyz");
        assert_eq!(err.to_string(), "unknown processor: xyz");

        // Keys are exact, not case-folded.
        assert!(Strategy::from_name("NN").is_err());
        assert!(Strategy::from_name("").is_err());
    }

    #[test]
    fn test_registry_names_are_unique_and_resolvable() {
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(Strategy::from_name(strategy.name()), Ok(*strategy));
            assert!(!strategy.description().is_empty());
            assert!(Strategy::ALL[i + 1..]
                .iter()
                .all(|other| other.name() != strategy.name()));
        }
    }

    #[test]
    fn test_mapper_name_matches_registry_key() {
        for &strategy in Strategy::ALL {
            let mapper = strategy.mapper(Palette::default(), &MapOptions::new());
            assert_eq!(mapper.name(), strategy.name());
        }
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(Strategy::NearestNeighbor.to_string(), "nn");
    }
}
