//! Remapper builder -- the ergonomic entry point for the crate.
//!
//! [`Remapper`] bundles a palette, a strategy and options behind a fluent
//! builder.

use super::error::MapError;
use crate::mapper::{MapOptions, Mapper, Strategy};
use crate::palette::Palette;
use crate::raster::Raster;

/// High-level builder for palette remapping.
///
/// - Constructor requires a [`Palette`] (an empty one is fine)
/// - Configuration methods consume and return `self`
/// - [`remap()`](Self::remap) takes `&self` so the builder is reusable
///   across multiple images
///
/// # Example
///
/// ```
/// use palette_map::{Color, Palette, Raster, Remapper, Strategy};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let remapper = Remapper::new(palette)
///     .strategy(Strategy::NearestNeighbor)
///     .preserve_alpha(false);
///
/// let image = Raster::filled(2, 2, Color::from_u8(220, 220, 220));
/// let result = remapper.remap(&image);
///
/// assert_eq!(result.width(), 2);
/// assert_eq!(result.get(1, 1), Some(Color::from_u8(255, 255, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct Remapper {
    palette: Palette,
    strategy: Strategy,
    options: MapOptions,
}

impl Remapper {
    /// Create a remapper with the default strategy and options.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            strategy: Strategy::default(),
            options: MapOptions::default(),
        }
    }

    /// Create a remapper, looking the strategy up by registry key.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnknownStrategy`] if `name` is not registered.
    pub fn with_strategy_name(palette: Palette, name: &str) -> Result<Self, MapError> {
        let strategy = Strategy::from_name(name)?;
        Ok(Self::new(palette).strategy(strategy))
    }

    /// Select the mapping strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Keep source alpha on mapped pixels (default: output is opaque).
    pub fn preserve_alpha(mut self, enabled: bool) -> Self {
        self.options.preserve_alpha = enabled;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    /// The selected strategy.
    pub fn selected_strategy(&self) -> Strategy {
        self.strategy
    }

    /// The palette pixels are mapped onto.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Build the boxed mapper for the current configuration.
    pub fn build(&self) -> Box<dyn Mapper> {
        self.strategy.mapper(self.palette.clone(), &self.options)
    }

    /// Map `image` onto the palette and return the new image.
    pub fn remap(&self, image: &Raster) -> Raster {
        self.build().process(image)
    }
}
