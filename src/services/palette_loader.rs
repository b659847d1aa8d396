use std::path::Path;

use palette_map::Palette;

use crate::error::ProcessError;
use crate::models::PaletteFile;

/// Load a palette from a JSON file of hex color strings.
///
/// Fails with [`ProcessError::FileAccess`] when the file cannot be read and
/// with [`ProcessError::PaletteFormat`] when it is not a JSON array of valid
/// hex strings. A single bad entry rejects the whole palette.
pub fn load_palette(path: &Path) -> Result<Palette, ProcessError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ProcessError::file_access(path, e))?;
    let palette = parse_palette_json(&content).map_err(|reason| ProcessError::PaletteFormat {
        path: path.to_path_buf(),
        reason,
    })?;

    tracing::debug!(path = %path.display(), colors = palette.len(), "Loaded palette");
    if palette.is_empty() {
        tracing::warn!(path = %path.display(), "Palette is empty, image will pass through unchanged");
    }
    Ok(palette)
}

/// Parse palette JSON text. The error is a human readable reason.
pub fn parse_palette_json(content: &str) -> Result<Palette, String> {
    let file: PaletteFile = serde_json::from_str(content).map_err(|e| e.to_string())?;
    Palette::from_hex(file.entries.as_slice()).map_err(|e| e.to_string())
}
