//! Highlight engine
//!
//! Re-marks the ORIGINAL text of a document wherever one of a set of terms
//! occurs in its normalized projection.
//!
//! # Algorithm
//!
//! One forward pass over the document's [`PairedToken`]s, driven by a small
//! state machine:
//!
//! ```text
//!            content token opens ≥1 candidate
//!   ┌──────┐ ─────────────────────────────────▶ ┌──────────────────────────┐
//!   │ Idle │                                     │ Matching                 │
//!   └──────┘ ◀───────────────────────────────── │  candidates, accumulator │
//!      ▲       a candidate completes: <mark>     └──────────────────────────┘
//!      │       all candidates drop: flush verbatim,      │
//!      └────── then retry the same token from Idle ◀─────┘
//! ```
//!
//! - Separators (whitespace, punctuation, analyzer stopwords) never advance
//!   or drop a candidate. While matching they are buffered; while idle they
//!   are emitted directly.
//! - A candidate is a term plus its unconsumed suffix. Candidates keep the
//!   caller's term order and the first one to run out of tokens wins.
//! - A token whose projection expands to several words (a synonym key)
//!   advances a candidate only if the term continues with ALL of them. The
//!   emitted text is always the original token.
//! - Anything still buffered at end of input is flushed without markup.
//!
//! Output is escaped; the only markup added is the `<mark>` wrapper.

use crate::analyzer::{Analyzer, PairedToken};
use crate::markup::{escape, escape_into, render_match};
use hashedix_core::{AnalyzerConfig, ConfigOverrides, Term};
use std::collections::{BTreeMap, HashMap};
use std::mem;

// ============================================================================
// HighlightOptions
// ============================================================================

/// Per-call highlight settings
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Compare tokens without folding case (default: true)
    ///
    /// Stopword lookup sees the same projection, so with case-sensitive
    /// matching a capitalized stopword ("Whole") is content rather than
    /// transparent. Terms indexed with case folding may then fail to match
    /// capitalized text; pass `false` to mirror folded indexing.
    pub case_sensitive: bool,

    /// Attributes rendered on the `<mark>` element of each term's matches
    pub term_attributes: HashMap<Term, BTreeMap<String, String>>,

    /// Stop marking after this many matches (`None` = unlimited)
    pub match_limit: Option<usize>,

    /// Analyzer overrides, merged by `SearchIndex::highlight`
    pub overrides: ConfigOverrides,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions {
            case_sensitive: true,
            term_attributes: HashMap::new(),
            match_limit: None,
            overrides: ConfigOverrides::default(),
        }
    }
}

impl HighlightOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Builder: attach attributes to a term's matches
    pub fn with_term_attributes<K, V>(
        mut self,
        term: Term,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.term_attributes.insert(
            term,
            attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Builder: cap the number of matches
    pub fn with_match_limit(mut self, limit: usize) -> Self {
        self.match_limit = Some(limit);
        self
    }

    /// Builder: set analyzer overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

// ============================================================================
// Highlighter
// ============================================================================

/// Highlight engine bound to an analyzer configuration.
///
/// Accepts terms of any length; the `SearchIndex` facade is where overly
/// long terms are rejected.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'c> {
    analyzer: Analyzer<'c>,
}

impl<'c> Highlighter<'c> {
    /// Create a highlighter over a configuration
    pub fn new(config: &'c AnalyzerConfig) -> Self {
        Highlighter {
            analyzer: Analyzer::new(config),
        }
    }

    /// Mark every occurrence of `terms` in `doc`.
    ///
    /// `options.overrides` is not consulted here; build the highlighter from
    /// the merged configuration instead.
    ///
    /// # Example
    ///
    /// ```
    /// use hashedix_core::{AnalyzerConfig, Term};
    /// use hashedix_search::{HighlightOptions, Highlighter};
    ///
    /// let config = AnalyzerConfig::default();
    /// let markup = Highlighter::new(&config).highlight(
    ///     "food mill.",
    ///     &[Term::from(["food", "processor"]), Term::from(["food", "mill"])],
    ///     &HighlightOptions::default(),
    /// );
    /// assert_eq!(markup, "<mark>food mill</mark>.");
    /// ```
    pub fn highlight(&self, doc: &str, terms: &[Term], options: &HighlightOptions) -> String {
        if terms.is_empty() {
            return escape(doc);
        }

        let mut matcher = Matcher::new(terms, options);
        for token in self.analyzer.pair(doc, options.case_sensitive) {
            matcher.feed(&token);
        }

        let matches = matcher.matches;
        let markup = matcher.finish();
        tracing::trace!(
            target: "hashedix::search",
            terms = terms.len(),
            matches,
            "Highlight rendered"
        );
        markup
    }
}

// ============================================================================
// Matcher state machine
// ============================================================================

/// A term still possibly matching at the current position
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    term: &'a Term,
    remaining: &'a [String],
}

#[derive(Debug)]
enum MatchState<'a> {
    Idle,
    Matching {
        candidates: Vec<Candidate<'a>>,
        /// Escaped original text since the candidates opened
        accumulator: String,
    },
}

struct Matcher<'a> {
    terms: &'a [Term],
    attributes: &'a HashMap<Term, BTreeMap<String, String>>,
    /// Matches still allowed; `None` is unlimited
    budget: Option<usize>,
    matches: usize,
    state: MatchState<'a>,
    out: String,
}

/// Consume `content` from the front of `remaining`, all or nothing.
fn consume<'a>(remaining: &'a [String], content: &[&str]) -> Option<&'a [String]> {
    if content.is_empty() || remaining.len() < content.len() {
        return None;
    }
    let matched = remaining.iter().zip(content).all(|(want, got)| want == got);
    matched.then(|| &remaining[content.len()..])
}

impl<'a> Matcher<'a> {
    fn new(terms: &'a [Term], options: &'a HighlightOptions) -> Self {
        Matcher {
            terms,
            attributes: &options.term_attributes,
            budget: options.match_limit,
            matches: 0,
            state: MatchState::Idle,
            out: String::new(),
        }
    }

    fn exhausted(&self) -> bool {
        self.budget == Some(0)
    }

    fn feed(&mut self, token: &PairedToken<'_>) {
        if self.exhausted() {
            escape_into(&mut self.out, token.raw);
            return;
        }

        let content = token.content();
        match mem::replace(&mut self.state, MatchState::Idle) {
            MatchState::Idle => self.open(token.raw, &content),
            MatchState::Matching {
                candidates,
                mut accumulator,
            } => {
                if content.is_empty() {
                    escape_into(&mut accumulator, token.raw);
                    self.state = MatchState::Matching {
                        candidates,
                        accumulator,
                    };
                    return;
                }

                let advanced: Vec<Candidate<'a>> = candidates
                    .into_iter()
                    .filter_map(|c| {
                        consume(c.remaining, &content).map(|remaining| Candidate {
                            term: c.term,
                            remaining,
                        })
                    })
                    .collect();

                if advanced.is_empty() {
                    // Partial match failed; this token may still start a new one.
                    self.out.push_str(&accumulator);
                    self.open(token.raw, &content);
                    return;
                }

                escape_into(&mut accumulator, token.raw);
                self.settle(advanced, accumulator);
            }
        }
    }

    /// Try to open candidates on a token while idle
    fn open(&mut self, raw: &str, content: &[&str]) {
        let candidates: Vec<Candidate<'a>> = if content.is_empty() {
            Vec::new()
        } else {
            self.terms
                .iter()
                .filter_map(|term| {
                    consume(term.tokens(), content).map(|remaining| Candidate { term, remaining })
                })
                .collect()
        };

        if candidates.is_empty() {
            escape_into(&mut self.out, raw);
            return;
        }

        self.settle(candidates, escape(raw));
    }

    /// Close on the first completed candidate, or keep matching
    fn settle(&mut self, candidates: Vec<Candidate<'a>>, accumulator: String) {
        match candidates.iter().find(|c| c.remaining.is_empty()) {
            Some(winner) => {
                render_match(
                    &mut self.out,
                    &accumulator,
                    self.attributes.get(winner.term),
                );
                self.matches += 1;
                if let Some(budget) = self.budget.as_mut() {
                    *budget = budget.saturating_sub(1);
                }
            }
            None => {
                self.state = MatchState::Matching {
                    candidates,
                    accumulator,
                };
            }
        }
    }

    fn finish(mut self) -> String {
        if let MatchState::Matching { accumulator, .. } = mem::replace(&mut self.state, MatchState::Idle) {
            self.out.push_str(&accumulator);
        }
        self.out
    }
}

// ============================================================================
// Tests
// ============================================================================
