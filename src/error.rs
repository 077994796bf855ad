//! Error types for icopack
//!
//! Library code returns `IcopackResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icopack operations
pub type IcopackResult<T> = Result<T, IcopackError>;

/// Main error type for icopack operations
#[derive(Error, Debug)]
pub enum IcopackError {
    /// Source directory missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// ICO input of a bundle run is missing
    #[error("ICO directory not found: {path} (run `icopack ico` first)")]
    MissingIcoSource { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Malformed icon metadata JSON
    #[error("invalid metadata in {file}: {message}")]
    InvalidMetadata { file: PathBuf, message: String },

    /// SVG source could not be parsed or rendered
    #[error("cannot render '{asset}': {message}")]
    Render { asset: String, message: String },

    /// Icon container could not be encoded or decoded
    #[error("cannot encode '{asset}': {message}")]
    Encode { asset: String, message: String },

    /// Resource bundle could not be generated
    #[error("cannot write bundle {file}: {message}")]
    Bundle { file: PathBuf, message: String },

    /// Conversion thread pool could not be started
    #[error("cannot start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system port error
    #[error("{0}")]
    Fs(#[from] crate::domain::ports::FsError),
}

impl IcopackError {
    /// Asset-scoped render failure
    pub fn render(asset: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Render {
            asset: asset.into(),
            message: message.to_string(),
        }
    }

    /// Asset-scoped encode failure
    pub fn encode(asset: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Encode {
            asset: asset.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_directory_not_found() {
        let err = IcopackError::DirectoryNotFound {
            path: PathBuf::from("icons"),
        };
        assert_eq!(err.to_string(), "directory not found: icons");
    }

    #[test]
    fn test_error_display_render() {
        let err = IcopackError::render("arrow-down", "unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "cannot render 'arrow-down': unexpected end of stream"
        );
    }

    #[test]
    fn test_error_display_invalid_metadata() {
        let err = IcopackError::InvalidMetadata {
            file: PathBuf::from("icons/x.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid metadata in icons/x.json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_error_display_missing_ico_source_hints_at_ico_command() {
        let err = IcopackError::MissingIcoSource {
            path: PathBuf::from("dist/#000000"),
        };
        assert_eq!(
            err.to_string(),
            "ICO directory not found: dist/#000000 (run `icopack ico` first)"
        );
    }
}
