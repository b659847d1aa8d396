use std::path::PathBuf;

use palette_map::UnknownStrategyError;
use thiserror::Error;

/// The three documented failure classes of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file could not be opened, read or written.
    FileAccess,
    /// Palette or image content could not be parsed.
    Format,
    /// The requested strategy is not registered.
    UnknownStrategy,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to access file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid palette {}: {reason}", .path.display())]
    PaletteFormat { path: PathBuf, reason: String },

    #[error("image format not allowed for {}: {reason}. please, use one of these: [jpeg, png]", .path.display())]
    ImageFormat { path: PathBuf, reason: String },

    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategyError),

    #[error("PNG encode error: {0}")]
    Encode(String),
}

impl ProcessError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProcessError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Classify this error into one of the documented kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessError::FileAccess { .. } => ErrorKind::FileAccess,
            ProcessError::PaletteFormat { .. }
            | ProcessError::ImageFormat { .. }
            | ProcessError::Encode(_) => ErrorKind::Format,
            ProcessError::UnknownStrategy(_) => ErrorKind::UnknownStrategy,
        }
    }
}
