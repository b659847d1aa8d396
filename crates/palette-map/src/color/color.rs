//! 16-bit RGBA color type
//!
//! Decoders hand out pixels at 8 or 16 bits per channel, while palette
//! entries are parsed from 8-bit hex strings. Everything is widened to
//! 16 bits on construction so distances are always measured on one scale.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// Maximum channel value (fully saturated / fully opaque).
pub const CHANNEL_MAX: u16 = u16::MAX;

/// Widen an 8-bit channel to 16 bits (`0xAB -> 0xABAB`).
#[inline]
fn widen(v: u8) -> u16 {
    v as u16 * 257
}

/// Narrow a 16-bit channel to 8 bits with rounding.
#[inline]
fn narrow(v: u16) -> u8 {
    ((v as u32 + 128) / 257) as u8
}

/// An RGBA color with 16 bits per channel.
///
/// Channels are straight (not premultiplied). Colors parsed from hex strings
/// or built with [`Color::from_u8`] are always fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0..=65535)
    pub r: u16,
    /// Green channel (0..=65535)
    pub g: u16,
    /// Blue channel (0..=65535)
    pub b: u16,
    /// Alpha channel (0 = transparent, 65535 = opaque)
    pub a: u16,
}

impl Color {
    /// Create an opaque color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use palette_map::Color;
    /// let red = Color::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 0xFFFF);
    /// assert!(red.is_opaque());
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }

    /// Create a color from 8-bit RGBA channel values.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: widen(r),
            g: widen(g),
            b: widen(b),
            a: widen(a),
        }
    }

    /// Create a color from 16-bit RGBA channel values.
    #[inline]
    pub fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 8-bit `[R, G, B]`, rounding each channel.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [narrow(self.r), narrow(self.g), narrow(self.b)]
    }

    /// Convert to 8-bit `[R, G, B, A]`, rounding each channel.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [narrow(self.r), narrow(self.g), narrow(self.b), narrow(self.a)]
    }

    /// Return the raw 16-bit `[R, G, B, A]` channels.
    #[inline]
    pub fn to_rgba16(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns true if the alpha channel is at its maximum.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == CHANNEL_MAX
    }

    /// Returns true if every channel survives a round trip through 8 bits.
    #[inline]
    pub fn fits_8bit(self) -> bool {
        self.to_rgba16()
            .iter()
            .all(|&c| widen(narrow(c)) == c)
    }

    /// Same color with the alpha channel replaced.
    #[inline]
    pub fn with_alpha(self, a: u16) -> Self {
        Self { a, ..self }
    }

    /// Same color with R, G and B scaled by alpha, as 16-bit premultiplied
    /// values. Opaque colors are returned unchanged.
    ///
    /// ```
    /// use palette_map::Color;
    /// let clear_white = Color::from_rgba8(255, 255, 255, 0);
    /// assert_eq!(clear_white.premultiplied().to_rgba16(), [0, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn premultiplied(self) -> Self {
        let scale = |c: u16| (c as u32 * self.a as u32 / CHANNEL_MAX as u32) as u16;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Squared Euclidean distance over R, G and B. Alpha is ignored.
    ///
    /// Exact integer arithmetic, so equal distances compare equal and
    /// tie-breaking stays deterministic.
    #[inline]
    pub fn distance_squared(self, other: Color) -> u64 {
        let dr = self.r as i64 - other.r as i64;
        let dg = self.g as i64 - other.g as i64;
        let db = self.b as i64 - other.b as i64;
        (dr * dr + dg * dg + db * db) as u64
    }

    /// Euclidean distance over R, G and B on the 16-bit scale.
    #[inline]
    pub fn distance(self, other: Color) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse an opaque color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex, with or without hash
    /// - `#RGB` / `RGB` - shorthand, each digit is doubled (`a` -> `aa`)
    ///
    /// Parsing is case-insensitive. Whitespace is not accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_map::Color;
    ///
    /// let white: Color = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.to_bytes(), [255, 255, 255]);
    ///
    /// let c: Color = "abc".parse().unwrap();
    /// assert_eq!(c.to_bytes(), [0xAA, 0xBB, 0xCC]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);

        let len = s.chars().count();
        if len != 3 && len != 6 {
            return Err(ParseColorError::InvalidLength(len));
        }
        // Checked up front: from_str_radix would accept a leading '+', and
        // slicing below assumes single-byte characters.
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(bad));
        }

        let digits: Vec<u8> = s
            .bytes()
            .map(|b| (b as char).to_digit(16).unwrap_or(0) as u8)
            .collect();

        let [r, g, b] = if len == 3 {
            [digits[0] * 17, digits[1] * 17, digits[2] * 17]
        } else {
            [
                (digits[0] << 4) | digits[1],
                (digits[2] << 4) | digits[3],
                (digits[4] << 4) | digits[5],
            ]
        };
        Ok(Self::from_u8(r, g, b))
    }
}
