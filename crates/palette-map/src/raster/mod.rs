//! Image container shared by every mapping strategy.
//!
//! [`Raster`] holds dimensions and row-major [`Color`](crate::Color) pixels.
//! Mappers borrow a source raster and return a freshly allocated one.

mod raster;

pub use raster::Raster;
