//! SearchIndex facade
//!
//! Binds an immutable [`AnalyzerConfig`] to a [`PostingStore`] and a
//! [`Scorer`], and exposes the caller-facing operations:
//!
//! - `add` / `add_with`: tokenize a document and record its terms
//! - `query` / `query_batch`: rank documents against query text
//! - `query_exact`: find the document made of exactly one term
//! - `highlight`: mark terms in original text
//!
//! Indexing and querying go through the same tokenizer, so a document and a
//! query with the same text always produce the same terms.
//!
//! # Per-call overrides
//!
//! Every operation that analyzes text takes [`ConfigOverrides`] through its
//! options. They are merged into a fresh configuration for that call only
//! and validated before any work starts.

use crate::highlight::{HighlightOptions, Highlighter};
use crate::index::{MemoryIndex, PostingStore};
use crate::ranking::{exact_match, rank, SearchHit};
use crate::scorer::{LengthWeightedScorer, Scorer};
use crate::tokenizer::{tokenize, TermStream};
use hashedix_core::{AnalyzerConfig, ConfigOverrides, DocId, Error, Result, Term};
use std::fmt;
use tracing::{debug, warn};

// ============================================================================
// Options
// ============================================================================

/// Options for [`SearchIndex::query`]
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Number of query terms to consume (`None` = all of them)
    ///
    /// Terms arrive longest first, so the default of 1 ranks by the most
    /// specific n-gram only.
    pub limit: Option<usize>,

    /// Analyzer overrides for this query
    pub overrides: ConfigOverrides,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            limit: Some(1),
            overrides: ConfigOverrides::default(),
        }
    }
}

impl QueryOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: consume at most `limit` query terms
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: consume every query term
    pub fn unbounded(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Builder: set analyzer overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Options for [`SearchIndex::add_with`]
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Occurrences recorded per produced term (must be at least 1)
    pub count: u32,

    /// Analyzer overrides for this document
    pub overrides: ConfigOverrides,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            count: 1,
            overrides: ConfigOverrides::default(),
        }
    }
}

impl IndexOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the occurrence multiplier
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Builder: set analyzer overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

// ============================================================================
// SearchIndex
// ============================================================================

/// Search facade over a posting store
///
/// # Thread Safety
///
/// Every operation takes `&self`. Sharing across threads is as safe as the
/// store makes it; [`MemoryIndex`] tolerates concurrent writers.
///
/// # Example
///
/// ```
/// use hashedix_core::AnalyzerConfig;
/// use hashedix_search::{QueryOptions, SearchIndex};
///
/// let index = SearchIndex::new(AnalyzerConfig::default()).unwrap();
/// index.add(0, "mayonnaise").unwrap();
///
/// let hits = index.query("mayonnaise", &QueryOptions::default()).unwrap();
/// assert_eq!(hits[0].doc_id, 0);
/// ```
pub struct SearchIndex<S: PostingStore = MemoryIndex> {
    config: AnalyzerConfig,
    store: S,
    scorer: Box<dyn Scorer>,
}

impl SearchIndex<MemoryIndex> {
    /// Create a search index backed by a fresh [`MemoryIndex`]
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Self::with_store(config, MemoryIndex::new())
    }
}

impl Default for SearchIndex<MemoryIndex> {
    fn default() -> Self {
        SearchIndex {
            config: AnalyzerConfig::default(),
            store: MemoryIndex::new(),
            scorer: Box::new(LengthWeightedScorer),
        }
    }
}

impl<S: PostingStore> fmt::Debug for SearchIndex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("config", &self.config)
            .field("scorer", &self.scorer.name())
            .finish_non_exhaustive()
    }
}

impl<S: PostingStore> SearchIndex<S> {
    /// Create a search index over an existing store
    pub fn with_store(config: AnalyzerConfig, store: S) -> Result<Self> {
        config.validate()?;
        Ok(SearchIndex {
            config,
            store,
            scorer: Box::new(LengthWeightedScorer),
        })
    }

    /// Builder: replace the scorer
    pub fn with_scorer(mut self, scorer: impl Scorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Default analyzer configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Underlying posting store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Name of the active scorer
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    fn resolve(&self, overrides: &ConfigOverrides) -> Result<AnalyzerConfig> {
        self.config.with_overrides(overrides).map_err(|e| {
            warn!(target: "hashedix::search", error = %e, "Rejected configuration overrides");
            e
        })
    }

    /// Tokenize text with this index's configuration plus `overrides`
    pub fn tokenize(&self, text: &str, overrides: &ConfigOverrides) -> Result<TermStream> {
        let config = self.resolve(overrides)?;
        Ok(tokenize(text, &config))
    }

    /// Index a document with default options
    ///
    /// Returns the number of terms recorded.
    pub fn add(&self, doc_id: DocId, text: &str) -> Result<usize> {
        self.add_with(doc_id, text, &IndexOptions::default())
    }

    /// Index a document, recording every produced term `options.count` times
    ///
    /// Adding the same document id again accumulates onto its postings.
    pub fn add_with(&self, doc_id: DocId, text: &str, options: &IndexOptions) -> Result<usize> {
        if options.count == 0 {
            warn!(target: "hashedix::search", doc_id, "Rejected zero occurrence count");
            return Err(Error::invalid_config("occurrence count must be at least 1"));
        }
        let config = self.resolve(&options.overrides)?;

        let mut recorded = 0;
        for term in tokenize(text, &config) {
            self.store
                .record_occurrence(&term, doc_id, u64::from(options.count));
            recorded += 1;
        }

        debug!(
            target: "hashedix::search",
            doc_id,
            terms = recorded,
            count = options.count,
            "Document added"
        );
        Ok(recorded)
    }

    /// Rank documents against query text
    pub fn query(&self, text: &str, options: &QueryOptions) -> Result<Vec<SearchHit>> {
        let config = self.resolve(&options.overrides)?;
        Ok(self.run_query(text, &config, options.limit))
    }

    /// Run several queries with shared options
    ///
    /// Results are returned in input order, paired with their query text.
    pub fn query_batch<I, Q>(
        &self,
        queries: I,
        options: &QueryOptions,
    ) -> Result<Vec<(String, Vec<SearchHit>)>>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        let config = self.resolve(&options.overrides)?;
        Ok(queries
            .into_iter()
            .map(|query| {
                let query = query.into();
                let hits = self.run_query(&query, &config, options.limit);
                (query, hits)
            })
            .collect())
    }

    fn run_query(&self, text: &str, config: &AnalyzerConfig, limit: Option<usize>) -> Vec<SearchHit> {
        let hits = rank(&self.store, self.scorer.as_ref(), tokenize(text, config), limit);
        debug!(
            target: "hashedix::search",
            limit = ?limit,
            hits = hits.len(),
            scorer = self.scorer.name(),
            "Query executed"
        );
        hits
    }

    /// Document consisting solely of `term`, if any
    pub fn query_exact(&self, term: &Term) -> Option<DocId> {
        exact_match(&self.store, term)
    }

    /// Mark `terms` in `text`
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the merged configuration is invalid
    /// - `TermTooLong` if a term has more tokens than the configured
    ///   n-gram window
    pub fn highlight(&self, text: &str, terms: &[Term], options: &HighlightOptions) -> Result<String> {
        let config = self.resolve(&options.overrides)?;
        if let Some(term) = terms.iter().find(|t| t.len() > config.ngrams) {
            warn!(
                target: "hashedix::search",
                term = %term,
                max = config.ngrams,
                "Rejected highlight term"
            );
            return Err(Error::TermTooLong {
                len: term.len(),
                max: config.ngrams,
            });
        }

        let markup = Highlighter::new(&config).highlight(text, terms, options);
        debug!(
            target: "hashedix::search",
            terms = terms.len(),
            bytes = markup.len(),
            "Highlight rendered"
        );
        Ok(markup)
    }
}

// ============================================================================
// Tests
// ============================================================================
