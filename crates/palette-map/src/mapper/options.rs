//! Mapping options and configuration.

/// Configuration shared by every mapping strategy.
///
/// # Example
///
/// ```
/// use palette_map::MapOptions;
///
/// let options = MapOptions::new().preserve_alpha(true);
/// assert!(options.preserve_alpha);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Carry the source pixel's alpha over to the mapped color.
    ///
    /// Palette colors are opaque, so with this disabled every mapped pixel
    /// is fully opaque.
    ///
    /// Default: `false`
    pub preserve_alpha: bool,
}

impl MapOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether source alpha is kept on mapped pixels.
    pub fn preserve_alpha(mut self, enabled: bool) -> Self {
        self.preserve_alpha = enabled;
        self
    }
}
