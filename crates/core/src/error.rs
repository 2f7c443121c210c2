//! Error types for hashedix
//!
//! Only caller misuse is an error here. Lookups that find nothing (unknown
//! terms, empty result sets, partial highlight matches) degrade to empty
//! values instead. We use `thiserror` for `Display` and `Error` impls.

use std::io;
use thiserror::Error;

/// Result type alias for hashedix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hashedix
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range (e.g. `ngrams == 0`)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A highlight term is longer than the configured n-gram window
    #[error("Term of {len} tokens exceeds the {max}-token n-gram window")]
    TermTooLong {
        /// Number of tokens in the offending term
        len: usize,
        /// Configured n-gram window
        max: usize,
    },

    /// I/O error while reading or writing a configuration file
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Configuration file could not be decoded
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// Configuration could not be encoded
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidConfig`]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
