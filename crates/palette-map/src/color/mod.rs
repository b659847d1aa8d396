//! Color type and hex parsing
//!
//! [`Color`] stores every channel at 16 bits. 8-bit inputs (hex palette
//! entries, 8-bit image decoders) are widened on construction, so a palette
//! color and a decoded pixel can be compared directly.
//!
//! # Example
//!
//! ```
//! use palette_map::Color;
//!
//! let from_hex: Color = "#808080".parse().unwrap();
//! let from_decoder = Color::from_rgba16(0x8080, 0x8080, 0x8080, u16::MAX);
//! assert_eq!(from_hex.distance_squared(from_decoder), 0);
//! ```

mod color;

pub use color::{Color, CHANNEL_MAX};
