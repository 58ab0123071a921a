use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Porter operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PorterError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Porter.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Porter.toml for syntax errors"))]
    Manifest { message: String },

    /// Network request or upload failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The publishing portal rejected a request.
    #[error("Portal error: {message}")]
    Portal { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PorterResult<T> = miette::Result<T>;
