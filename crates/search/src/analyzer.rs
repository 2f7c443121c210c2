//! Text analyzer
//!
//! Pipeline: split into atomic tokens → substitute synonyms (single pass)
//!           → fold case → stem words → drop stopwords / filtered separators
//!
//! Splitting follows one fixed rule: a maximal run of whitespace is one
//! token, a maximal run of non-whitespace, non-punctuation characters is one
//! token, and every punctuation character is a token of its own.
//!
//! Two projections are produced from the same split:
//! - [`Analyzer::analyze`]: the filtered, normalized word list that n-gram
//!   windows are cut from (indexing and querying).
//! - [`Analyzer::pair`]: one [`PairedToken`] per original token, carrying the
//!   untouched text next to its normalized form (highlighting). Pairing the
//!   two in one item keeps them from ever drifting apart.

use hashedix_core::{is_punctuation, is_separator, AnalyzerConfig};
use std::iter::FusedIterator;

// ============================================================================
// Raw tokens
// ============================================================================

/// Classification of an atomic token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of non-whitespace, non-punctuation characters
    Word,
    /// Run of whitespace
    Whitespace,
    /// Single punctuation character
    Punctuation,
}

impl TokenKind {
    fn of(c: char) -> TokenKind {
        if c.is_whitespace() {
            TokenKind::Whitespace
        } else if is_punctuation(c) {
            TokenKind::Punctuation
        } else {
            TokenKind::Word
        }
    }
}

/// Atomic slice of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// Exact source text
    pub text: &'a str,
    /// Token classification
    pub kind: TokenKind,
}

/// Iterator over the atomic tokens of a string. See [`split_tokens`].
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Split<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<RawToken<'a>> {
        let first = self.rest.chars().next()?;
        let kind = TokenKind::of(first);
        let end = match kind {
            TokenKind::Punctuation => first.len_utf8(),
            _ => self
                .rest
                .char_indices()
                .find(|&(_, c)| TokenKind::of(c) != kind)
                .map(|(i, _)| i)
                .unwrap_or(self.rest.len()),
        };
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(RawToken { text, kind })
    }
}

impl FusedIterator for Split<'_> {}

/// Split text into atomic tokens.
///
/// Concatenating the tokens reproduces the input exactly.
///
/// # Example
///
/// ```
/// use hashedix_search::analyzer::split_tokens;
///
/// let tokens: Vec<&str> = split_tokens("coriander, chopped").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["coriander", ",", " ", "chopped"]);
/// ```
pub fn split_tokens(text: &str) -> Split<'_> {
    Split { rest: text }
}

// ============================================================================
// PairedToken
// ============================================================================

/// An original token paired with its normalized projection.
///
/// `normalized` usually holds exactly one token. A synonym key expands to the
/// words of its replacement phrase, and a stopword projects to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedToken<'t> {
    /// Untouched source text, used for output
    pub raw: &'t str,
    /// Normalized tokens, used for matching
    pub normalized: Vec<String>,
}

impl PairedToken<'_> {
    /// Normalized tokens that take part in matching.
    ///
    /// Empty when the token is a separator, which makes it transparent.
    pub fn content(&self) -> Vec<&str> {
        self.normalized
            .iter()
            .map(String::as_str)
            .filter(|t| !is_separator(t))
            .collect()
    }

    /// Check whether this token is transparent to matching
    pub fn is_separator(&self) -> bool {
        self.normalized.iter().all(|t| is_separator(t))
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Configured text analyzer.
///
/// Stateless apart from the borrowed configuration, so one analyzer can
/// serve any number of calls.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'c> {
    config: &'c AnalyzerConfig,
}

impl<'c> Analyzer<'c> {
    /// Create an analyzer over a configuration
    pub fn new(config: &'c AnalyzerConfig) -> Self {
        Analyzer { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &'c AnalyzerConfig {
        self.config
    }

    /// Split text into atomic tokens, ignoring configuration.
    pub fn split<'t>(&self, text: &'t str) -> Split<'t> {
        split_tokens(text)
    }

    /// Substitute a word token with its synonym phrase, split into tokens.
    ///
    /// Substitution is not recursive: the phrase is never looked up again.
    fn substitute<'s>(&'s self, token: RawToken<'s>) -> Pieces<'s> {
        if token.kind == TokenKind::Word {
            if let Some(phrase) = self.config.synonyms.get(token.text) {
                return Pieces::Phrase(split_tokens(phrase));
            }
        }
        Pieces::Single(Some(token))
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.config.stopwords.contains(word)
    }

    /// Fold (optionally) and stem a word, or `None` if it is a stopword.
    fn normalize_word(&self, word: &str, fold_case: bool) -> Option<String> {
        let folded = if fold_case {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        if self.is_stopword(&folded) {
            return None;
        }
        let stemmed = self.config.stem(&folded);
        if self.is_stopword(&stemmed) {
            return None;
        }
        Some(stemmed)
    }

    /// Produce the normalized token list that n-gram windows are cut from.
    ///
    /// Whitespace and punctuation are kept only when the matching
    /// `retain_*` flag is set; stopwords and words that stem to nothing are
    /// always dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use hashedix_core::AnalyzerConfig;
    /// use hashedix_search::Analyzer;
    ///
    /// let config = AnalyzerConfig::default().with_stopwords(["diced"]);
    /// let tokens = Analyzer::new(&config).analyze("Red Pepper, diced");
    /// assert_eq!(tokens, vec!["red", "pepper"]);
    /// ```
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let fold_case = !self.config.retain_casing;
        let mut tokens = Vec::new();
        for raw in split_tokens(text) {
            for piece in self.substitute(raw) {
                match piece.kind {
                    TokenKind::Word => {
                        if let Some(word) = self.normalize_word(piece.text, fold_case) {
                            if !word.is_empty() {
                                tokens.push(word);
                            }
                        }
                    }
                    TokenKind::Whitespace if self.config.retain_whitespace => {
                        tokens.push(piece.text.to_string());
                    }
                    TokenKind::Punctuation if self.config.retain_punctuation => {
                        tokens.push(piece.text.to_string());
                    }
                    _ => {}
                }
            }
        }
        tokens
    }

    /// Pair every original token with its normalized projection.
    ///
    /// Case folding here follows `case_sensitive`, not `retain_casing`.
    /// Whitespace and punctuation project to themselves (separators); a word
    /// projects to its stemmed form, or to the words of its synonym phrase.
    pub fn pair<'t>(
        &self,
        text: &'t str,
        case_sensitive: bool,
    ) -> impl Iterator<Item = PairedToken<'t>> + 't
    where
        'c: 't,
    {
        let analyzer = *self;
        split_tokens(text).map(move |raw| analyzer.project(raw, case_sensitive))
    }

    fn project<'t>(&self, raw: RawToken<'t>, case_sensitive: bool) -> PairedToken<'t> {
        let normalized = match raw.kind {
            TokenKind::Word => self
                .substitute(raw)
                .filter(|piece| piece.kind == TokenKind::Word)
                .filter_map(|piece| self.normalize_word(piece.text, !case_sensitive))
                .collect(),
            TokenKind::Whitespace | TokenKind::Punctuation => vec![raw.text.to_string()],
        };
        PairedToken {
            raw: raw.text,
            normalized,
        }
    }
}

/// Output of synonym substitution for one raw token
enum Pieces<'a> {
    Single(Option<RawToken<'a>>),
    Phrase(Split<'a>),
}

impl<'a> Iterator for Pieces<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<RawToken<'a>> {
        match self {
            Pieces::Single(token) => token.take(),
            Pieces::Phrase(split) => split.next(),
        }
    }
}
