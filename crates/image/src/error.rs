//! Error types for the favicon crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for favicon operations.
pub type Result<T> = std::result::Result<T, FaviconError>;

/// Errors that can occur during favicon processing.
#[derive(Debug, Error)]
pub enum FaviconError {
    /// Source image could not be read or decoded
    #[error("Failed to decode {path}: {source}")]
    Decode {
        /// Path of the unreadable source image
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: image::ImageError,
    },

    /// No pixel exceeded the opacity threshold
    #[error("No content found above alpha threshold {threshold}")]
    EmptyContent {
        /// The alpha cutoff that no pixel exceeded
        threshold: u8,
    },

    /// Output image could not be encoded or written
    #[error("Failed to write {path}: {source}")]
    Encode {
        /// Destination path that could not be written
        path: PathBuf,
        /// Underlying encode error
        #[source]
        source: image::ImageError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_message() {
        let err = FaviconError::EmptyContent { threshold: 100 };
        assert_eq!(
            err.to_string(),
            "No content found above alpha threshold 100"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FaviconError = io.into();
        assert!(matches!(err, FaviconError::Io(_)));
    }
}
