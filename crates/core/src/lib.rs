//! Core types and traits for hashedix
//!
//! This crate defines the foundational types used throughout the system:
//! - Term: ordered sequence of normalized tokens, the unit of indexing
//! - DocId: caller-owned document identifier
//! - Token classification: separators vs content
//! - Stemmer: pluggable stemming capability
//! - AnalyzerConfig / ConfigOverrides: immutable configuration plus per-call merges
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod term;
pub mod traits;

pub use config::{AnalyzerConfig, ConfigOverrides, CONFIG_FILE_NAME, DEFAULT_NGRAMS};
pub use error::{Error, Result};
pub use term::{is_punctuation, is_separator, DocId, Term};
pub use traits::{NullStemmer, Stemmer};
