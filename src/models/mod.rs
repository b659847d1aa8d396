pub mod options;
pub mod palette_file;

pub use options::{ProcessOptions, DEFAULT_OUTPUT};
pub use palette_file::PaletteFile;
