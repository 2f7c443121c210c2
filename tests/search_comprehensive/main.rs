//! Search Comprehensive Test Suite
//!
//! Tests for the tokenization, ranking and highlighting guarantees.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Highlight Invariants** (escaping, transparency, tie-breaks)
//! - **Tier 2: Ranking Correctness** (scoring, ordering, limits, exact match)
//! - **Tier 3: Tokenization** (n-gram order, stopwords, synonyms, overrides)
//! - **Tier 4: Configuration** (TOML files, validation, merges)
//! - **Tier 5: Property-Based** (catch edge cases)
//! - **Tier 6: Stress** (recipe corpus at scale, use #[ignore])
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all comprehensive tests
//! cargo test --test search_comprehensive
//!
//! # Run specific tier
//! cargo test --test search_comprehensive tier1
//!
//! # Run stress tests (slow, opt-in)
//! cargo test --test search_comprehensive stress -- --ignored
//! ```

mod test_utils;

// Tier 1: Highlight Invariants
mod tier1_highlight_invariants;




// Tier 5: Property-Based
mod tier5_property_based;

// Tier 6: Stress (use #[ignore])
mod tier6_stress;
