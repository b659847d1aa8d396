//! Image decoding (PNG, JPEG) and PNG encoding.
//!
//! Decoded images are converted to 16-bit RGBA so that 8- and 16-bit sources
//! land on the same scale as palette colors. The PNG writer picks the
//! smallest lossless layout for the content:
//! - every pixel opaque → RGB, otherwise RGBA
//! - every channel exact at 8 bits → 8-bit, otherwise 16-bit

use std::io::Write;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use palette_map::{Color, Raster};
use tempfile::NamedTempFile;

use crate::error::ProcessError;

/// Read and decode an image file, sniffing the format from its content.
pub fn decode_image(path: &Path) -> Result<Raster, ProcessError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| ProcessError::file_access(path, e))?;

    let format = reader.format();
    let image = reader
        .decode()
        .map_err(|e: ImageError| ProcessError::ImageFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        format = ?format,
        color = ?image.color(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(raster_from_dynamic(&image))
}

/// Convert a decoded image into a 16-bit RGBA raster.
pub fn raster_from_dynamic(image: &DynamicImage) -> Raster {
    let rgba = image.to_rgba16();
    let pixels = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            Color::from_rgba16(r, g, b, a)
        })
        .collect();
    Raster::new(rgba.width(), rgba.height(), pixels)
}

/// Encode a raster as PNG into memory.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, ProcessError> {
    let opaque = raster.is_opaque();
    let eight_bit = raster.fits_8bit();

    let color_type = if opaque {
        png::ColorType::Rgb
    } else {
        png::ColorType::Rgba
    };
    let bit_depth = if eight_bit {
        png::BitDepth::Eight
    } else {
        png::BitDepth::Sixteen
    };
    let data = pack_samples(raster.pixels(), opaque, eight_bit);

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, raster.width(), raster.height());
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ProcessError::Encode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| ProcessError::Encode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| ProcessError::Encode(e.to_string()))?;
    }

    tracing::debug!(
        bytes = buf.len(),
        color = ?color_type,
        depth = ?bit_depth,
        "Encoded PNG"
    );
    Ok(buf)
}

/// Write encoded bytes to `path`.
///
/// The bytes go to a temporary file next to `path` which is then renamed
/// over it, so `path` either keeps its old content or holds the complete
/// new image.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ProcessError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file =
        NamedTempFile::new_in(dir).map_err(|e| ProcessError::file_access(path, e))?;
    file.write_all(bytes)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| ProcessError::file_access(path, e))?;
    file.persist(path)
        .map_err(|e| ProcessError::file_access(path, e.error))?;
    Ok(())
}

/// Flatten pixels into PNG sample bytes (16-bit samples are big-endian).
/// Alpha is dropped for opaque images.
fn pack_samples(pixels: &[Color], opaque: bool, eight_bit: bool) -> Vec<u8> {
    let channels = if opaque { 3 } else { 4 };
    let bytes_per_sample = if eight_bit { 1 } else { 2 };
    let mut out = Vec::with_capacity(pixels.len() * channels * bytes_per_sample);
    for &pixel in pixels {
        if eight_bit {
            let rgba = pixel.to_rgba8();
            out.extend_from_slice(&rgba[..channels]);
        } else {
            let rgba = pixel.to_rgba16();
            for sample in &rgba[..channels] {
                out.extend_from_slice(&sample.to_be_bytes());
            }
        }
    }
    out
}
