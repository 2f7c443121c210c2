//! N-gram tokenizer
//!
//! Turns a document into the lazy sequence of terms consumed by indexing and
//! querying: every contiguous window of `n` analyzed tokens, for `n` from the
//! configured maximum down to 1. Longer n-grams come first so that a query
//! limit keeps the most specific terms.
//!
//! The stream ends with `None`; there is no in-band end marker.

use crate::analyzer::Analyzer;
use hashedix_core::{AnalyzerConfig, Term};
use std::iter::FusedIterator;

/// Tokenize text into n-gram terms
///
/// # Example
///
/// ```
/// use hashedix_core::{AnalyzerConfig, Term};
/// use hashedix_search::tokenizer::tokenize;
///
/// let config = AnalyzerConfig::default().with_synonyms([("soymilk", "soy milk")]);
/// let terms: Vec<Term> = tokenize("soymilk", &config).collect();
/// assert_eq!(
///     terms,
///     vec![
///         Term::from(["soy", "milk"]),
///         Term::from(["soy"]),
///         Term::from(["milk"]),
///     ]
/// );
/// ```
pub fn tokenize(text: &str, config: &AnalyzerConfig) -> TermStream {
    TermStream::new(Analyzer::new(config).analyze(text), config.ngrams)
}

// ============================================================================
// TermStream
// ============================================================================

/// Lazy, finite, non-restartable sequence of n-gram terms.
///
/// Analysis happens once up front; windows are cut on demand.
#[derive(Debug, Clone)]
pub struct TermStream {
    tokens: Vec<String>,
    /// Current window length; 0 once exhausted
    n: usize,
    /// Start of the next window
    start: usize,
}

impl TermStream {
    /// Create a stream over already-analyzed tokens
    pub fn new(tokens: Vec<String>, max_ngram: usize) -> Self {
        TermStream {
            n: max_ngram.min(tokens.len()),
            tokens,
            start: 0,
        }
    }

    /// Check whether the stream has no terms left
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn remaining(&self) -> usize {
        if self.n == 0 {
            return 0;
        }
        let len = self.tokens.len();
        let current = len + 1 - self.n - self.start;
        // Shorter windows: for each k < n there are len + 1 - k windows.
        let shorter: usize = (1..self.n).map(|k| len + 1 - k).sum();
        current + shorter
    }
}

impl Iterator for TermStream {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        while self.n > 0 {
            let end = self.start + self.n;
            if end <= self.tokens.len() {
                let term = Term::new(self.tokens[self.start..end].to_vec());
                self.start += 1;
                return Some(term);
            }
            self.n -= 1;
            self.start = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TermStream {}

impl FusedIterator for TermStream {}
