//! imgm - image palette remapper
//!
//! Replaces every pixel of an image with the nearest color of a palette.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
