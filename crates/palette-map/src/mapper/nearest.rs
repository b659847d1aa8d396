//! Nearest-neighbor palette mapping.

use super::{MapOptions, Mapper};
use crate::color::Color;
use crate::palette::Palette;
use crate::raster::Raster;

/// Replaces each pixel with the closest palette color by Euclidean RGB
/// distance.
///
/// - Distance is measured on the 16-bit channel scale between the
///   alpha-premultiplied pixel and the (opaque) palette entries, so a
///   transparent pixel compares as black.
/// - Ties go to the entry that appears first in the palette.
/// - An empty palette maps every pixel to itself.
///
/// # Example
///
/// ```
/// use palette_map::{Color, Mapper, MapOptions, NearestNeighbor, Palette, Raster};
///
/// let palette = Palette::from_hex(&["#000", "#fff"]).unwrap();
/// let mapper = NearestNeighbor::new(palette, MapOptions::new());
///
/// let image = Raster::filled(2, 1, Color::from_u8(200, 200, 200));
/// let result = mapper.process(&image);
/// assert_eq!(result.get(0, 0), Some(Color::from_u8(255, 255, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    palette: Palette,
    options: MapOptions,
}

impl NearestNeighbor {
    /// Create a mapper for the given palette.
    pub fn new(palette: Palette, options: MapOptions) -> Self {
        Self { palette, options }
    }

    /// The palette pixels are mapped onto.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Map a single pixel.
    #[inline]
    pub fn convert(&self, pixel: Color) -> Color {
        let Some((idx, _)) = self.palette.find_nearest(pixel.premultiplied()) else {
            return pixel;
        };
        let nearest = self.palette.colors()[idx];
        if self.options.preserve_alpha {
            nearest.with_alpha(pixel.a)
        } else {
            nearest
        }
    }
}

impl Mapper for NearestNeighbor {
    fn name(&self) -> &'static str {
        "nn"
    }

    fn process(&self, image: &Raster) -> Raster {
        image.map_pixels(|pixel| self.convert(pixel))
    }
}
