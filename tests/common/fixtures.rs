//! Test fixtures: scratch directories with images and palettes on disk.

use std::path::{Path, PathBuf};

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

/// Palette colors used across tests
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// A temporary working directory that is removed on drop.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a palette file with the given JSON content.
    pub fn palette(&self, name: &str, json: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, json).expect("Failed to write palette");
        path
    }

    /// Write an RGB image, row-major pixels, in the given format.
    pub fn rgb_image(
        &self,
        name: &str,
        width: u32,
        height: u32,
        pixels: &[[u8; 3]],
        format: ImageFormat,
    ) -> PathBuf {
        assert_eq!(pixels.len(), (width * height) as usize);
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb(pixels[(y * width + x) as usize])
        });
        let path = self.path(name);
        image
            .save_with_format(&path, format)
            .expect("Failed to write image");
        path
    }

    /// Write an RGBA PNG.
    pub fn rgba_png(&self, name: &str, width: u32, height: u32, pixels: &[[u8; 4]]) -> PathBuf {
        assert_eq!(pixels.len(), (width * height) as usize);
        let image = RgbaImage::from_fn(width, height, |x, y| {
            Rgba(pixels[(y * width + x) as usize])
        });
        let path = self.path(name);
        image
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write image");
        path
    }

    /// Write a 16-bit-per-channel RGB PNG.
    pub fn rgb16_png(&self, name: &str, width: u32, height: u32, pixels: &[[u16; 3]]) -> PathBuf {
        assert_eq!(pixels.len(), (width * height) as usize);
        let image: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb(pixels[(y * width + x) as usize])
        });
        let path = self.path(name);
        image
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write image");
        path
    }
}

/// The 2x2 [red, green, blue, white] image used by several tests.
pub fn primaries_2x2(ws: &Workspace) -> PathBuf {
    ws.rgb_image(
        "primaries.png",
        2,
        2,
        &[colors::RED, colors::GREEN, colors::BLUE, colors::WHITE],
        ImageFormat::Png,
    )
}

/// Decode an output file to 8-bit RGBA pixels in row-major order.
pub fn read_rgba(path: &Path) -> (u32, u32, Vec<[u8; 4]>) {
    let image = image::open(path).expect("Failed to open output").to_rgba8();
    let (w, h) = image.dimensions();
    (w, h, image.pixels().map(|p| p.0).collect())
}

/// Decode an output file to 8-bit RGB pixels in row-major order.
pub fn read_rgb(path: &Path) -> Vec<[u8; 3]> {
    let (_, _, pixels) = read_rgba(path);
    pixels.iter().map(|p| [p[0], p[1], p[2]]).collect()
}
