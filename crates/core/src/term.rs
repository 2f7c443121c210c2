//! Terms and token classification
//!
//! A [`Term`] is the unit of indexing, querying and highlight matching: an
//! ordered, fixed-length sequence of normalized tokens. Two terms are equal
//! iff their tokens are equal element-wise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-owned document identifier
pub type DocId = u64;

/// Punctuation characters that form single-character tokens.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Check whether a token is a separator.
///
/// A separator is a non-empty run of whitespace, or any token that strips to
/// nothing once punctuation is removed (which includes the empty token a
/// stemmer may produce). Separators are transparent to term matching.
pub fn is_separator(token: &str) -> bool {
    if !token.is_empty() && token.chars().all(char::is_whitespace) {
        return true;
    }
    token.trim_matches(is_punctuation).is_empty()
}

// ============================================================================
// Term
// ============================================================================

/// Ordered sequence of normalized tokens
///
/// The empty term is never produced by tokenization and can never complete a
/// highlight match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(Vec<String>);

impl Term {
    /// Create a term from its tokens
    pub fn new(tokens: Vec<String>) -> Self {
        Term(tokens)
    }

    /// Tokens of this term
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the zero-length term
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First token, if any
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Consume the term, returning its tokens
    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Term {
    fn from(tokens: Vec<String>) -> Self {
        Term(tokens)
    }
}

impl From<&[&str]> for Term {
    fn from(tokens: &[&str]) -> Self {
        tokens.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Term {
    fn from(tokens: [&str; N]) -> Self {
        tokens.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Term {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Term(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", token)?;
        }
        write!(f, ")")
    }
}
