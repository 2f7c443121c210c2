//! Core trait definitions
//!
//! Stemming algorithms live outside this workspace; they plug in through
//! [`Stemmer`].

/// Pluggable stemming capability
///
/// Applied to word tokens only, after case normalization. Any
/// `Fn(&str) -> String` closure is a stemmer.
///
/// # Thread Safety
///
/// Stemmers must be Send + Sync so a configuration can be shared.
pub trait Stemmer: Send + Sync {
    /// Reduce a word to its stem
    fn stem(&self, word: &str) -> String;
}

/// Identity stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStemmer;

impl Stemmer for NullStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}
