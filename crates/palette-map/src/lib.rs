#![allow(clippy::module_inception)]

//! palette-map: Nearest-color palette remapping for raster images
//!
//! This library replaces every pixel of an image with the closest color of
//! a user-supplied palette, measured by Euclidean distance in RGB space.
//!
//! # Quick Start
//!
//! The [`Remapper`] builder is the primary entry point:
//!
//! ```
//! use palette_map::{Color, Palette, Raster, Remapper};
//!
//! let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
//! let remapper = Remapper::new(palette);
//!
//! let image = Raster::new(
//!     2,
//!     2,
//!     vec![
//!         Color::from_u8(255, 0, 0),
//!         Color::from_u8(0, 255, 0),
//!         Color::from_u8(0, 0, 255),
//!         Color::from_u8(255, 255, 255),
//!     ],
//! );
//! let result = remapper.remap(&image);
//!
//! assert_eq!(result.get(0, 0), Some(Color::from_u8(0, 0, 0)));
//! assert_eq!(result.get(1, 1), Some(Color::from_u8(255, 255, 255)));
//! ```
//!
//! # Strategies
//!
//! Mapping algorithms implement [`Mapper`] and are selected by key through
//! [`Strategy`]. The only registered strategy is `"nn"`
//! ([`NearestNeighbor`]).
//!
//! # Channel Precision
//!
//! Palette colors come from 8-bit hex strings while decoded images may carry
//! 16 bits per channel. [`Color`] always stores 16-bit channels and widens
//! 8-bit input by 257, so `#808080` and a 16-bit `0x8080` grey are the same
//! color and sit at distance zero. Distances are exact integers, which keeps
//! the "first palette entry wins" tie-break deterministic.
//!
//! # Alpha
//!
//! Pixels are premultiplied by their alpha before matching, so a fully
//! transparent pixel compares as black. Palette colors are opaque, so
//! mapped pixels are opaque unless [`MapOptions::preserve_alpha`] is set.
//! An empty palette maps every pixel, alpha included, to itself.

pub mod api;
pub mod color;
pub mod mapper;
pub mod palette;
pub mod raster;


pub use api::{MapError, Remapper};
pub use color::{Color, CHANNEL_MAX};
pub use mapper::{MapOptions, Mapper, NearestNeighbor, Strategy, UnknownStrategyError};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use raster::Raster;
