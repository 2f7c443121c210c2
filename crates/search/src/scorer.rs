//! Scoring infrastructure
//!
//! This module provides:
//! - Scorer trait for pluggable per-term scoring
//! - LengthWeightedScorer default implementation
//!
//! A scorer sees one (term, document) pair at a time. The ranking engine
//! sums the returned values per document.

use hashedix_core::Term;

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Returns the contribution of one matched term to one document's score.
/// Higher scores indicate more relevant documents.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync so a `SearchIndex` can be shared.
pub trait Scorer: Send + Sync {
    /// Score `term` occurring `term_frequency` times in a document of
    /// `document_length` total recorded occurrences
    fn score(&self, term: &Term, term_frequency: u64, document_length: u64) -> f64;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// LengthWeightedScorer
// ============================================================================

/// Term-length weighted frequency, normalized by document length
///
/// # Formula
///
/// score = term_len * tf / doc_len
///
/// Longer terms weigh more, so a two-word phrase hit outranks two unrelated
/// single-word hits of the same frequency. A zero-length document scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthWeightedScorer;

impl LengthWeightedScorer {
    /// Create the scorer
    pub fn new() -> Self {
        LengthWeightedScorer
    }
}

impl Scorer for LengthWeightedScorer {
    fn score(&self, term: &Term, term_frequency: u64, document_length: u64) -> f64 {
        if document_length == 0 {
            return 0.0;
        }
        term.len() as f64 * term_frequency as f64 / document_length as f64
    }

    fn name(&self) -> &str {
        "length-weighted"
    }
}

// ============================================================================
// Tests
// ============================================================================
