//! Error types for configuration and frame I/O failures

use std::fmt;
use std::path::PathBuf;

/// Main error type for all frame processing operations
#[derive(Debug)]
pub enum FractalError {
    /// Output resolution string could not be parsed
    ///
    /// Raised before any frame is touched, so a failed run performs no file I/O.
    InvalidResolution {
        /// Resolution string as given on the command line
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to open or decode an input frame
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write an output frame
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { value, reason } => {
                write!(f, "Invalid resolution '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FractalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidResolution { .. } => None,
        }
    }
}

/// Convenience type alias for frame processing results
pub type Result<T> = std::result::Result<T, FractalError>;

impl FractalError {
    /// Check whether this error was raised by configuration rather than I/O
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidResolution { .. })
    }
}

/// Create an invalid resolution error
pub fn invalid_resolution(value: &impl ToString, reason: &impl ToString) -> FractalError {
    FractalError::InvalidResolution {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
