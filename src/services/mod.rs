pub mod palette_loader;
pub mod pipeline;

pub use palette_loader::{load_palette, parse_palette_json};
pub use pipeline::{process, ProcessSummary};
