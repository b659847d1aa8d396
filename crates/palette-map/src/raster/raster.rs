//! In-memory raster image.

use crate::color::Color;

/// A fully materialized image: dimensions plus one [`Color`] per pixel in
/// row-major order.
///
/// # Example
///
/// ```
/// use palette_map::{Color, Raster};
///
/// let red = Color::from_u8(255, 0, 0);
/// let image = Raster::filled(3, 2, red);
///
/// assert_eq!(image.width(), 3);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.get(2, 1), Some(red));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Create a raster from row-major pixels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a raster where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Build a new raster of the same size by applying `f` to every pixel.
    ///
    /// The source is left untouched.
    pub fn map_pixels<F>(&self, f: F) -> Raster
    where
        F: FnMut(Color) -> Color,
    {
        Raster::new(
            self.width,
            self.height,
            self.pixels.iter().copied().map(f).collect(),
        )
    }

    /// Returns true if every pixel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.pixels.iter().all(|c| c.is_opaque())
    }

    /// Returns true if every channel of every pixel fits in 8 bits.
    pub fn fits_8bit(&self) -> bool {
        self.pixels.iter().all(|c| c.fits_8bit())
    }

    /// Consume the raster and return its pixels.
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_row_major() {
        let pixels = vec![
            Color::from_u8(0, 0, 0),
            Color::from_u8(1, 0, 0),
            Color::from_u8(2, 0, 0),
            Color::from_u8(3, 0, 0),
            Color::from_u8(4, 0, 0),
            Color::from_u8(5, 0, 0),
        ];
        let image = Raster::new(3, 2, pixels);
        assert_eq!(image.get(0, 0).unwrap().to_bytes(), [0, 0, 0]);
        assert_eq!(image.get(2, 0).unwrap().to_bytes(), [2, 0, 0]);
        assert_eq!(image.get(0, 1).unwrap().to_bytes(), [3, 0, 0]);
        assert_eq!(image.get(2, 1).unwrap().to_bytes(), [5, 0, 0]);
        assert_eq!(image.get(3, 0), None);
        assert_eq!(image.get(0, 2), None);
    }

    #[test]
    fn test_map_pixels_leaves_source() {
        let source = Raster::filled(2, 2, Color::from_u8(10, 20, 30));
        let mapped = source.map_pixels(|_| Color::from_u8(0, 0, 0));

        assert_eq!(source.pixels()[0].to_bytes(), [10, 20, 30]);
        assert_eq!(mapped.pixels()[0].to_bytes(), [0, 0, 0]);
        assert_eq!((mapped.width(), mapped.height()), (2, 2));
    }

    #[test]
    fn test_opacity_and_depth_checks() {
        let mut pixels = vec![Color::from_u8(1, 2, 3); 4];
        assert!(Raster::new(2, 2, pixels.clone()).is_opaque());
        assert!(Raster::new(2, 2, pixels.clone()).fits_8bit());

        pixels[3] = Color::from_rgba16(0x0102, 0, 0, 0x8000);
        let image = Raster::new(2, 2, pixels);
        assert!(!image.is_opaque());
        assert!(!image.fits_8bit());
    }

    #[test]
    fn test_empty_raster() {
        let image = Raster::new(0, 0, Vec::new());
        assert!(image.pixels().is_empty());
        assert!(image.is_opaque());
        assert_eq!(image.get(0, 0), None);
    }
}
