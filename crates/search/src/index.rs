//! Posting store seam and the bundled in-memory inverted index
//!
//! This module provides:
//! - PostingStore: the interface ranking and indexing consume
//! - MemoryIndex: DashMap-backed implementation with posting lists
//!
//! # Bookkeeping
//!
//! Every recorded occurrence adds `count` to the term's frequency in the
//! document AND to the document's total length. A document whose length
//! equals one term's frequency therefore consists solely of that term.

use dashmap::DashMap;
use hashedix_core::{DocId, Term};
use std::collections::BTreeSet;

// ============================================================================
// PostingStore
// ============================================================================

/// Inverted index collaborator
///
/// Unknown terms and documents are not errors: lookups return empty sets
/// and zero counts.
///
/// # Thread Safety
///
/// Implementations must be Send + Sync. The engine assumes at most one
/// writer at a time; anything stronger is the implementation's contract.
pub trait PostingStore: Send + Sync {
    /// Record `count` occurrences of `term` in `doc_id`
    fn record_occurrence(&self, term: &Term, doc_id: DocId, count: u64);

    /// Documents containing `term` (empty if unknown)
    fn documents_for(&self, term: &Term) -> BTreeSet<DocId>;

    /// Total occurrences recorded for `doc_id`
    fn document_length(&self, doc_id: DocId) -> u64;

    /// Occurrences of `term` recorded for `doc_id`
    fn term_frequency(&self, term: &Term, doc_id: DocId) -> u64;

    /// Check whether any document contains `term`
    fn contains(&self, term: &Term) -> bool;
}

// ============================================================================
// PostingEntry / PostingList
// ============================================================================

/// Entry in a posting list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PostingEntry {
    doc_id: DocId,
    /// Term frequency in this document
    tf: u64,
}

/// Documents containing a term, one entry per document
#[derive(Debug, Clone, Default)]
struct PostingList {
    entries: Vec<PostingEntry>,
}

impl PostingList {
    /// Add occurrences for a document, merging with an existing entry
    fn add(&mut self, doc_id: DocId, count: u64) {
        match self.entries.iter_mut().find(|e| e.doc_id == doc_id) {
            Some(entry) => entry.tf += count,
            None => self.entries.push(PostingEntry { doc_id, tf: count }),
        }
    }

    /// Term frequency for a document (0 if absent)
    fn tf(&self, doc_id: DocId) -> u64 {
        self.entries
            .iter()
            .find(|e| e.doc_id == doc_id)
            .map(|e| e.tf)
            .unwrap_or(0)
    }
}

// ============================================================================
// MemoryIndex
// ============================================================================

/// In-memory inverted index
///
/// # Thread Safety
///
/// Uses DashMap for concurrent access; every method takes `&self`.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    /// Term -> PostingList mapping
    postings: DashMap<Term, PostingList>,

    /// DocId -> total recorded occurrences
    doc_lengths: DashMap<DocId, u64>,
}

impl MemoryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct documents indexed
    pub fn total_docs(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Number of distinct terms indexed
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

impl PostingStore for MemoryIndex {
    fn record_occurrence(&self, term: &Term, doc_id: DocId, count: u64) {
        if count == 0 {
            return;
        }
        self.postings
            .entry(term.clone())
            .or_default()
            .add(doc_id, count);
        *self.doc_lengths.entry(doc_id).or_insert(0) += count;
    }

    fn documents_for(&self, term: &Term) -> BTreeSet<DocId> {
        self.postings
            .get(term)
            .map(|list| list.entries.iter().map(|e| e.doc_id).collect())
            .unwrap_or_default()
    }

    fn document_length(&self, doc_id: DocId) -> u64 {
        self.doc_lengths.get(&doc_id).map(|r| *r).unwrap_or(0)
    }

    fn term_frequency(&self, term: &Term, doc_id: DocId) -> u64 {
        self.postings
            .get(term)
            .map(|list| list.tf(doc_id))
            .unwrap_or(0)
    }

    fn contains(&self, term: &Term) -> bool {
        self.postings.contains_key(term)
    }
}

// ============================================================================
// Tests
// ============================================================================
