//! Error handling for the page strip application
//!
//! This module defines the crate error type and a Result alias. The page
//! operations themselves are infallible (missing ids degrade to no-ops);
//! only the configuration layer produces errors.

use thiserror::Error;

/// Main error type for page strip operations
#[derive(Error, Debug)]
pub enum PageStripError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for page strip operations
pub type Result<T> = std::result::Result<T, PageStripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageStripError::Config("missing data directory".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing data directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PageStripError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
