//! Error types for ETF Compass
//!
//! The only fatal error class is a registry invariant violation detected
//! at load time. Missing per-ticker data never raises; it degrades to
//! neutral values inside the pipeline.

use thiserror::Error;

/// Main error type for ETF Compass
#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for ETF Compass operations
pub type Result<T> = std::result::Result<T, CompassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompassError::Registry("duplicate anchor GLD".to_string());
        assert_eq!(err.to_string(), "Registry error: duplicate anchor GLD");
    }

    #[test]
    fn test_serde_error_conversion() {
        let bad: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: CompassError = bad.unwrap_err().into();
        assert!(matches!(err, CompassError::SerdeError(_)));
    }
}
