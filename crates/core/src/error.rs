//! Error types for s3up-core
//!
//! Two kinds of failure surface from the orchestrator: a missing local file
//! or directory (`NotFound`, raised before any network call) and a storage
//! backend failure (`Transport`, propagated as-is — never retried, never
//! reclassified).

use thiserror::Error;

/// Result type alias for s3up-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3up-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Local file or directory missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure from the storage backend
    #[error("Storage error: {0}")]
    Transport(String),

    /// IO error reading local files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("/tmp/missing.txt".into());
        assert_eq!(err.to_string(), "Not found: /tmp/missing.txt");

        let err = Error::Transport("connection reset".into());
        assert_eq!(err.to_string(), "Storage error: connection reset");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
