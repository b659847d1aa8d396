//! Ordered palette with nearest-color lookup.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Color;

/// An ordered list of target colors.
///
/// Order only matters for tie-breaking: when two entries are equally close
/// to a pixel, the one that comes first wins. Duplicate entries are allowed
/// and an empty palette is valid (mappers treat it as the identity).
///
/// # Example
///
/// ```
/// use palette_map::{Color, Palette};
///
/// let palette = Palette::new(vec![Color::from_u8(0, 0, 0), Color::from_u8(255, 255, 255)]);
/// assert_eq!(palette.len(), 2);
///
/// let (idx, _) = palette.find_nearest(Color::from_u8(40, 40, 40)).unwrap();
/// assert_eq!(idx, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors, keeping their order.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Create a palette from hex color strings.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsed colors are
    /// always fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first entry that fails
    /// to parse. No colors are returned in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_map::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#fff", "abc"]).unwrap();
    /// assert_eq!(palette.get(2).unwrap().to_bytes(), [170, 187, 204]);
    /// ```
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, PaletteError> {
        let colors = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let entry = entry.as_ref();
                Color::from_str(entry).map_err(|source| PaletteError::ParseColor {
                    index,
                    entry: entry.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(colors))
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Color> {
        self.colors.get(idx).copied()
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over the colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// Find the palette entry closest to `color` by Euclidean RGB distance.
    ///
    /// Returns `(index, squared_distance)`, or `None` for an empty palette.
    /// Alpha is ignored. On ties the lowest index wins.
    #[inline]
    pub fn find_nearest(&self, color: Color) -> Option<(usize, u64)> {
        // Linear scan; strict `<` keeps the first of equally close entries.
        let mut best: Option<(usize, u64)> = None;
        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    #[test]
    fn test_palette_basic_construction() {
        let palette = Palette::new(vec![
            Color::from_u8(0, 0, 0),
            Color::from_u8(255, 255, 255),
            Color::from_u8(255, 0, 0),
        ]);
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(2), Some(Color::from_u8(255, 0, 0)));
        assert_eq!(palette.get(3), None);
    }

    #[test]
    fn test_empty_palette_is_valid() {
        let palette = Palette::default();
        assert!(palette.is_empty());
        assert_eq!(palette.find_nearest(Color::from_u8(1, 2, 3)), None);
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        let (idx, dist) = palette.find_nearest(Color::from_u8(0, 0, 0)).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(dist, 0);
    }

    #[test]
    fn test_find_nearest_greys() {
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();

        let (idx, _) = palette.find_nearest(Color::from_u8(64, 64, 64)).unwrap();
        assert_eq!(idx, 0, "Dark gray should match black");

        let (idx, _) = palette.find_nearest(Color::from_u8(192, 192, 192)).unwrap();
        assert_eq!(idx, 1, "Light gray should match white");
    }

    #[test]
    fn test_find_nearest_tie_prefers_first() {
        // (0,0,0) and (2,0,0) are both at distance 1 (8-bit) from (1,0,0).
        let forward = Palette::new(vec![Color::from_u8(0, 0, 0), Color::from_u8(2, 0, 0)]);
        let backward = Palette::new(vec![Color::from_u8(2, 0, 0), Color::from_u8(0, 0, 0)]);
        let pixel = Color::from_u8(1, 0, 0);

        assert_eq!(forward.find_nearest(pixel).unwrap().0, 0);
        assert_eq!(backward.find_nearest(pixel).unwrap().0, 0);
    }

    #[test]
    fn test_find_nearest_duplicates_pick_first() {
        let palette = Palette::from_hex(&["#f00", "#ff0000", "#000"]).unwrap();
        let (idx, _) = palette.find_nearest(Color::from_u8(250, 5, 5)).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_from_hex_formats() {
        let palette = Palette::from_hex(&["#ffffff", "#fff", "#000", "abc", "123456"]).unwrap();
        let bytes: Vec<[u8; 3]> = palette.iter().map(|c| c.to_bytes()).collect();
        assert_eq!(
            bytes,
            vec![
                [255, 255, 255],
                [255, 255, 255],
                [0, 0, 0],
                [170, 187, 204],
                [0x12, 0x34, 0x56],
            ]
        );
        assert!(palette.iter().all(|c| c.is_opaque()));
    }

    #[test]
    fn test_from_hex_owned_strings() {
        let entries = vec!["#000".to_string(), "#fff".to_string()];
        assert_eq!(Palette::from_hex(entries.as_slice()).unwrap().len(), 2);
    }

    #[test]
    fn test_from_hex_rejects_bad_entry() {
        let result = Palette::from_hex(&["#000000", "#ff", "#ffffff"]);
        assert_eq!(
            result,
            Err(PaletteError::ParseColor {
                index: 1,
                entry: "#ff".to_string(),
                source: ParseColorError::InvalidLength(2),
            })
        );
    }

    #[test]
    fn test_from_hex_invalid_hex() {
        let result = Palette::from_hex(&["#ZZZZZZ"]);
        assert!(matches!(
            result,
            Err(PaletteError::ParseColor {
                source: ParseColorError::InvalidHex('Z'),
                ..
            })
        ));
    }

    #[test]
    fn test_collect_into_palette() {
        let palette: Palette = (0..5u8).map(|i| Color::from_u8(i * 50, 0, 0)).collect();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.colors()[4].to_bytes(), [200, 0, 0]);
    }
}
