use std::path::PathBuf;

use palette_map::Strategy;

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "modified.png";

/// Everything one run of the pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Source raster (PNG or JPEG)
    pub image: PathBuf,
    /// Palette file (JSON array of hex strings)
    pub palette: PathBuf,
    /// Strategy registry key
    pub strategy: String,
    /// Where the PNG result is written
    pub output: PathBuf,
    /// Keep source alpha on mapped pixels
    pub preserve_alpha: bool,
}

impl ProcessOptions {
    /// Options with the default strategy and output path.
    pub fn new(image: impl Into<PathBuf>, palette: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            palette: palette.into(),
            strategy: Strategy::default().name().to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preserve_alpha: false,
        }
    }

    pub fn strategy(mut self, name: impl Into<String>) -> Self {
        self.strategy = name.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn preserve_alpha(mut self, enabled: bool) -> Self {
        self.preserve_alpha = enabled;
        self
    }
}
