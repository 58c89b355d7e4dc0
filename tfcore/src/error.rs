//! Error types for tfcore

/// Error type for tfcore operations
#[derive(Debug, thiserror::Error)]
pub enum TfcoreError {
    #[error("Resource type not found: {0}")]
    ResourceNotFound(String),

    #[error("Data source type not found: {0}")]
    DataSourceNotFound(String),

    #[error("Provider not configured")]
    ProviderNotConfigured,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("{0}")]
    Custom(String),
}

/// Result type alias for tfcore operations
pub type Result<T> = std::result::Result<T, TfcoreError>;

impl From<String> for TfcoreError {
    fn from(s: String) -> Self {
        TfcoreError::Custom(s)
    }
}

impl From<&str> for TfcoreError {
    fn from(s: &str) -> Self {
        TfcoreError::Custom(s.to_string())
    }
}
