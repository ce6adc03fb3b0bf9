//! Error types for modelkit
//!
//! Collection operations report a miss by returning `None` (or `-1` for
//! index lookups) and never fail. This error type covers the surfaces
//! around them: configuration, record conversion, and the checked lookup
//! helpers for callers that prefer `?` over matching on `Option`.

use std::io;
use thiserror::Error;

/// Result type alias for modelkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for modelkit
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML or JSON encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A JSON value that is not an object cannot become a record
    #[error("Expected a JSON object for a record, got {0}")]
    NotARecord(String),

    /// No model carries the requested identity
    #[error("No model with {key} = {id}")]
    NotFound {
        /// Key the lookup used
        key: String,
        /// Identity that missed, rendered for display
        id: String,
    },
}

impl Error {
    /// Build a [`Error::NotFound`] from anything displayable
    pub fn not_found(key: impl Into<String>, id: impl std::fmt::Display) -> Self {
        Error::NotFound {
            key: key.into(),
            id: id.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
