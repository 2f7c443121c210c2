//! Hashedix - n-gram text retrieval with exact-span highlighting
//!
//! Hashedix turns free text into normalized n-gram terms, records them in an
//! inverted index, ranks documents against a query, and re-marks the
//! original, unnormalized text wherever a set of terms occurs.
//!
//! # Quick Start
//!
//! ```
//! use hashedix::{AnalyzerConfig, HighlightOptions, QueryOptions, SearchIndex};
//!
//! let index = SearchIndex::new(AnalyzerConfig::default())?;
//! index.add(0, "Place in Dutch oven")?;
//!
//! let hits = index.query("dutch oven", &QueryOptions::default())?;
//! let markup = index.highlight(
//!     "Place in Dutch oven",
//!     &hits[0].terms,
//!     &HighlightOptions::new().with_case_sensitive(false),
//! )?;
//! assert_eq!(markup, "Place in <mark>Dutch oven</mark>");
//! # Ok::<(), hashedix::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `hashedix-core`: terms, configuration, the stemmer capability, errors
//! - `hashedix-search`: analyzer, tokenizer, posting store, ranking and
//!   highlighting, tied together by [`SearchIndex`]

pub use hashedix_core::*;
pub use hashedix_search::*;
