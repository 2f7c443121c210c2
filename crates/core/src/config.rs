//! Analyzer configuration via `hashedix.toml`
//!
//! [`AnalyzerConfig`] is an immutable value passed to every operation.
//! Per-call changes are expressed as [`ConfigOverrides`] and merged into a
//! new configuration with [`AnalyzerConfig::with_overrides`]; the defaults
//! held by an index are never mutated.

use crate::error::{Error, Result};
use crate::traits::Stemmer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Config file name for a persisted analyzer configuration.
pub const CONFIG_FILE_NAME: &str = "hashedix.toml";

/// Default maximum n-gram length.
pub const DEFAULT_NGRAMS: usize = 4;

fn default_ngrams() -> usize {
    DEFAULT_NGRAMS
}

// ============================================================================
// AnalyzerConfig
// ============================================================================

/// Text analysis configuration shared by indexing, querying and highlighting.
///
/// # Example
///
/// ```toml
/// ngrams = 4
/// stopwords = ["diced", "whole"]
/// retain_casing = false
///
/// [synonyms]
/// soymilk = "soy milk"
/// ```
///
/// The stemmer is a runtime capability and is never read from or written to
/// a file.
#[derive(Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Longest n-gram produced by tokenization (>= 1)
    #[serde(default = "default_ngrams")]
    pub ngrams: usize,
    /// Normalized words dropped from every n-gram window
    #[serde(default)]
    pub stopwords: BTreeSet<String>,
    /// Keep original casing instead of folding to lowercase
    #[serde(default)]
    pub retain_casing: bool,
    /// Keep punctuation tokens inside n-gram windows
    #[serde(default)]
    pub retain_punctuation: bool,
    /// Keep whitespace tokens inside n-gram windows
    #[serde(default)]
    pub retain_whitespace: bool,
    /// Word -> replacement phrase, applied once before any other processing.
    /// Must stay after the scalar fields: TOML tables follow plain values.
    #[serde(default)]
    pub synonyms: BTreeMap<String, String>,
    /// Stemmer applied to word tokens (identity when unset)
    #[serde(skip)]
    pub stemmer: Option<Arc<dyn Stemmer>>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            ngrams: DEFAULT_NGRAMS,
            stopwords: BTreeSet::new(),
            synonyms: BTreeMap::new(),
            retain_casing: false,
            retain_punctuation: false,
            retain_whitespace: false,
            stemmer: None,
        }
    }
}

impl fmt::Debug for AnalyzerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerConfig")
            .field("ngrams", &self.ngrams)
            .field("stopwords", &self.stopwords)
            .field("synonyms", &self.synonyms)
            .field("retain_casing", &self.retain_casing)
            .field("retain_punctuation", &self.retain_punctuation)
            .field("retain_whitespace", &self.retain_whitespace)
            .field("stemmer", &self.stemmer.as_ref().map(|_| "<stemmer>"))
            .finish()
    }
}

impl AnalyzerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the maximum n-gram length
    pub fn with_ngrams(mut self, ngrams: usize) -> Self {
        self.ngrams = ngrams;
        self
    }

    /// Builder: set stopwords
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set synonyms
    pub fn with_synonyms<I, K, V>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.synonyms = synonyms
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Builder: set the stemmer
    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Some(Arc::new(stemmer));
        self
    }

    /// Builder: keep original casing
    pub fn with_retain_casing(mut self, retain: bool) -> Self {
        self.retain_casing = retain;
        self
    }

    /// Builder: keep punctuation tokens
    pub fn with_retain_punctuation(mut self, retain: bool) -> Self {
        self.retain_punctuation = retain;
        self
    }

    /// Builder: keep whitespace tokens
    pub fn with_retain_whitespace(mut self, retain: bool) -> Self {
        self.retain_whitespace = retain;
        self
    }

    /// Stem a word with the configured stemmer, or return it unchanged.
    pub fn stem(&self, word: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word),
            None => word.to_string(),
        }
    }

    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `ngrams` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.ngrams < 1 {
            return Err(Error::invalid_config(format!(
                "ngrams must be at least 1, got {}",
                self.ngrams
            )));
        }
        Ok(())
    }

    /// Merge per-call overrides into a new, validated configuration.
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Result<AnalyzerConfig> {
        let mut merged = self.clone();
        if let Some(ngrams) = overrides.ngrams {
            merged.ngrams = ngrams;
        }
        if let Some(stopwords) = &overrides.stopwords {
            merged.stopwords = stopwords.clone();
        }
        if let Some(synonyms) = &overrides.synonyms {
            merged.synonyms = synonyms.clone();
        }
        if let Some(retain) = overrides.retain_casing {
            merged.retain_casing = retain;
        }
        if let Some(retain) = overrides.retain_punctuation {
            merged.retain_punctuation = retain;
        }
        if let Some(retain) = overrides.retain_whitespace {
            merged.retain_whitespace = retain;
        }
        if let Some(stemmer) = &overrides.stemmer {
            merged.stemmer = Some(Arc::clone(stemmer));
        }
        merged.validate()?;
        Ok(merged)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Hashedix analyzer configuration
#
# Longest n-gram emitted by tokenization (default: 4)
ngrams = 4

# Words dropped from every n-gram window, compared after case folding
stopwords = []

# Keep original casing instead of folding to lowercase (default: false)
retain_casing = false

# Keep punctuation / whitespace tokens inside n-gram windows (default: false)
retain_punctuation = false
retain_whitespace = false

# Single-pass word substitutions applied before tokenization
# [synonyms]
# soymilk = "soy milk"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AnalyzerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// ConfigOverrides
// ============================================================================

/// Per-call configuration changes. Unset fields keep the base value.
#[derive(Clone, Default)]
pub struct ConfigOverrides {
    /// Override `ngrams`
    pub ngrams: Option<usize>,
    /// Replace the stopword set
    pub stopwords: Option<BTreeSet<String>>,
    /// Replace the synonym map
    pub synonyms: Option<BTreeMap<String, String>>,
    /// Override `retain_casing`
    pub retain_casing: Option<bool>,
    /// Override `retain_punctuation`
    pub retain_punctuation: Option<bool>,
    /// Override `retain_whitespace`
    pub retain_whitespace: Option<bool>,
    /// Replace the stemmer; pass [`NullStemmer`](crate::NullStemmer) to disable stemming
    pub stemmer: Option<Arc<dyn Stemmer>>,
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("ngrams", &self.ngrams)
            .field("stopwords", &self.stopwords)
            .field("synonyms", &self.synonyms)
            .field("retain_casing", &self.retain_casing)
            .field("retain_punctuation", &self.retain_punctuation)
            .field("retain_whitespace", &self.retain_whitespace)
            .field("stemmer", &self.stemmer.as_ref().map(|_| "<stemmer>"))
            .finish()
    }
}

impl ConfigOverrides {
    /// No overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override `ngrams`
    pub fn ngrams(mut self, ngrams: usize) -> Self {
        self.ngrams = Some(ngrams);
        self
    }

    /// Builder: override stopwords
    pub fn stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(stopwords.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: override synonyms
    pub fn synonyms<I, K, V>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.synonyms = Some(
            synonyms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Builder: override `retain_casing`
    pub fn retain_casing(mut self, retain: bool) -> Self {
        self.retain_casing = Some(retain);
        self
    }

    /// Builder: override `retain_punctuation`
    pub fn retain_punctuation(mut self, retain: bool) -> Self {
        self.retain_punctuation = Some(retain);
        self
    }

    /// Builder: override `retain_whitespace`
    pub fn retain_whitespace(mut self, retain: bool) -> Self {
        self.retain_whitespace = Some(retain);
        self
    }

    /// Builder: override the stemmer
    pub fn stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Some(Arc::new(stemmer));
        self
    }
}
