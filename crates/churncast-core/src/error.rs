//! Error types for Churncast

/// Result type alias using Churncast's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Churncast operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Artifact loading/parsing errors
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Record validation errors (out-of-range values, bad options)
    #[error("validation error: {0}")]
    Validation(String),

    /// A categorical value absent from the fitted class list
    #[error("unknown category {value:?} for column {column:?}")]
    UnknownCategory { column: String, value: String },

    /// Mismatch between the artifacts and the record/feature layout
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new unknown-category error
    pub fn unknown_category(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a new schema mismatch error
    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is the caller's fault (bad input rather than a
    /// server-side failure)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnknownCategory { .. }
        )
    }
}
