use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the source bundler.
#[derive(Error, Debug)]
pub enum BundleError {
    /// A source file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The aggregated output could not be written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured file extension is empty or malformed.
    #[error("Invalid file extension: {0:?}")]
    InvalidExtension(String),

    /// The run report could not be serialised.
    #[error("Failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the bundler crates.
pub type Result<T> = std::result::Result<T, BundleError>;
