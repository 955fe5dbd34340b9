//! Error types for robots-core

/// Result type for robots-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in robots-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] robots_fs::Error),

    #[error("Unknown environment: {value}")]
    UnknownEnvironment { value: String },
}
