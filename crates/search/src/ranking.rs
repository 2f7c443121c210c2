//! Ranking engine
//!
//! Walks a query's term stream against a [`PostingStore`], accumulates a
//! score and a hit count per candidate document, and sorts the result.
//!
//! # Ordering
//!
//! Hits are sorted by score descending, then by total term frequency
//! descending, then by `doc_id` ascending. The last key only breaks exact
//! ties so that equal inputs always produce the same list.

use crate::index::PostingStore;
use crate::scorer::Scorer;
use hashedix_core::{DocId, Term};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

// ============================================================================
// SearchHit
// ============================================================================

/// A single ranked document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Matched document
    pub doc_id: DocId,

    /// Sum of per-term scores (higher = more relevant)
    pub score: f64,

    /// Query terms found in this document, in query order
    pub terms: Vec<Term>,

    /// Total frequency of the matched terms in this document
    pub count: u64,
}

impl SearchHit {
    /// Create an empty hit for a document
    pub fn new(doc_id: DocId) -> Self {
        SearchHit {
            doc_id,
            score: 0.0,
            terms: vec![],
            count: 0,
        }
    }

    fn record(&mut self, term: &Term, score: f64, tf: u64) {
        self.score += score;
        self.count += tf;
        self.terms.push(term.clone());
    }
}

/// Total order used for result lists
pub fn compare_hits(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.count.cmp(&a.count))
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

// ============================================================================
// Ranking
// ============================================================================

/// Rank documents against a sequence of query terms.
///
/// At most `limit` terms are consumed from `terms` (`None` consumes all of
/// them). Terms unknown to the store use up the limit but contribute
/// nothing.
pub fn rank<S, I>(store: &S, scorer: &dyn Scorer, terms: I, limit: Option<usize>) -> Vec<SearchHit>
where
    S: PostingStore + ?Sized,
    I: IntoIterator<Item = Term>,
{
    let mut hits: HashMap<DocId, SearchHit> = HashMap::new();

    for term in terms.into_iter().take(limit.unwrap_or(usize::MAX)) {
        if !store.contains(&term) {
            continue;
        }
        for doc_id in store.documents_for(&term) {
            let doc_len = store.document_length(doc_id);
            let tf = store.term_frequency(&term, doc_id);
            let score = scorer.score(&term, tf, doc_len);
            hits.entry(doc_id)
                .or_insert_with(|| SearchHit::new(doc_id))
                .record(&term, score, tf);
        }
    }

    let mut results: Vec<SearchHit> = hits.into_values().collect();
    results.sort_by(compare_hits);
    results
}

/// Find the document consisting solely of repetitions of `term`.
///
/// When several documents qualify the lowest `doc_id` is returned.
pub fn exact_match<S>(store: &S, term: &Term) -> Option<DocId>
where
    S: PostingStore + ?Sized,
{
    if !store.contains(term) {
        return None;
    }
    store
        .documents_for(term)
        .into_iter()
        .find(|&doc_id| store.term_frequency(term, doc_id) == store.document_length(doc_id))
}

// ============================================================================
// Tests
// ============================================================================
