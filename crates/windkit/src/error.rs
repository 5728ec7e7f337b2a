//! Error types for the prop ingestion boundary.
//!
//! The compiler itself is total: [`crate::compile`] never fails, it degrades
//! malformed input into best-effort output. Errors only arise when a prop
//! document handed over by an external scanner is structurally invalid.

/// Result type alias for prop ingestion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while ingesting a prop document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The prop document could not be parsed at all.
    #[error("prop parse error: {message}")]
    Parse { message: String },

    /// A prop value that is neither a scalar nor a qualifier mapping.
    #[error("invalid value for prop '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
