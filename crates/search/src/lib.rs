//! Text retrieval for hashedix
//!
//! This crate provides:
//! - Analyzer: splitting, synonym substitution, case folding, stemming
//! - Tokenizer: lazy n-gram term streams
//! - PostingStore trait and the in-memory MemoryIndex
//! - Scorer trait and the LengthWeightedScorer default
//! - Ranking of documents against query terms
//! - Highlighter: marks terms in original, unnormalized text
//! - SearchIndex: facade tying the above together
//!
//! # Usage
//!
//! ```
//! use hashedix_core::{AnalyzerConfig, Term};
//! use hashedix_search::{HighlightOptions, QueryOptions, SearchIndex};
//!
//! let config = AnalyzerConfig::default().with_stemmer(|w: &str| w.trim_end_matches('s').to_string());
//! let index = SearchIndex::new(config).unwrap();
//! index.add(1, "five onions, diced").unwrap();
//!
//! let hits = index.query("onions", &QueryOptions::default()).unwrap();
//! assert_eq!(hits[0].doc_id, 1);
//!
//! let markup = index
//!     .highlight("five onions, diced", &hits[0].terms, &HighlightOptions::default())
//!     .unwrap();
//! assert_eq!(markup, "five <mark>onions</mark>, diced");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod highlight;
pub mod index;
pub mod markup;
pub mod ranking;
pub mod scorer;
pub mod search;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{split_tokens, Analyzer, PairedToken, RawToken, TokenKind};
pub use highlight::{HighlightOptions, Highlighter};
pub use index::{MemoryIndex, PostingStore};
pub use ranking::{compare_hits, exact_match, rank, SearchHit};
pub use scorer::{LengthWeightedScorer, Scorer};
pub use search::{IndexOptions, QueryOptions, SearchIndex};
pub use tokenizer::{tokenize, TermStream};
