use std::path::PathBuf;

use palette_map::{MapOptions, Strategy};

use crate::error::ProcessError;
use crate::models::ProcessOptions;
use crate::rendering::{decode_image, encode_png, write_output};
use crate::services::palette_loader::load_palette;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub width: u32,
    pub height: u32,
    pub palette_size: usize,
    pub strategy: Strategy,
    pub output: PathBuf,
}

/// Run decode → palette → strategy → map → encode → write.
///
/// Stops at the first failure. The output file is only created once the
/// PNG has been fully encoded in memory, so a failed run never leaves a
/// partial output behind.
pub fn process(options: &ProcessOptions) -> Result<ProcessSummary, ProcessError> {
    let image = decode_image(&options.image)?;
    let palette = load_palette(&options.palette)?;
    let strategy = Strategy::from_name(&options.strategy)?;

    let palette_size = palette.len();
    let map_options = MapOptions::new().preserve_alpha(options.preserve_alpha);
    let mapper = strategy.mapper(palette, &map_options);

    tracing::debug!(
        strategy = mapper.name(),
        width = image.width(),
        height = image.height(),
        palette_size,
        "Mapping image"
    );
    let updated = mapper.process(&image);

    let png_bytes = encode_png(&updated)?;
    write_output(&options.output, &png_bytes)?;

    tracing::info!(
        output = %options.output.display(),
        width = updated.width(),
        height = updated.height(),
        palette_size,
        strategy = %strategy,
        "Wrote remapped image"
    );

    Ok(ProcessSummary {
        width: updated.width(),
        height: updated.height(),
        palette_size,
        strategy,
        output: options.output.clone(),
    })
}
