//! Test utilities for search comprehensive tests

#![allow(dead_code)]

use hashedix::{AnalyzerConfig, SearchIndex};

/// Recipe lines used across tiers
pub const RECIPE_DOCUMENTS: &[&str] = &[
    "red bell pepper diced",
    "onions",
    "mayonnaise",
    "whole onion",
    "five onions, diced",
    "egg & bacon",
    "one carrot",
    "Wine",
    "Place in Dutch Oven, and leave for one hour",
    "daal daal daal",
    "one two three",
    "mushrooms",
    "tofu",
    "can of baked beans",
    "sliced red bell pepper as filling",
    "put the skewer in the frying pan",
    "put the kebab skewers in the pan",
    "60 ml crème fraîche",
    "preheat the oven to 300 degrees",
    "Step one, oven.  Phase two: pan.",
    "food mill.",
    "medium onion",
    "garlic",
    "place in the bread maker",
    "clove",
    "garlic",
    "place the towel onto the place mat",
    "empty term example",
];

/// Stopwords applied to the recipe corpus
pub const RECIPE_STOPWORDS: &[&str] = &["diced", "whole"];

/// Install a test-friendly tracing subscriber (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Strips a single trailing run of `s`
pub fn plural_stemmer(word: &str) -> String {
    word.trim_end_matches('s').to_string()
}

/// Recipe configuration: stopwords only
pub fn recipe_config() -> AnalyzerConfig {
    AnalyzerConfig::default().with_stopwords(RECIPE_STOPWORDS.iter().copied())
}

/// Index the recipe corpus `copies` times; doc ids follow corpus order
pub fn recipe_index(copies: usize) -> SearchIndex {
    init_tracing();
    let index = SearchIndex::new(recipe_config()).unwrap();
    for (doc_id, doc) in RECIPE_DOCUMENTS.iter().cycle().take(RECIPE_DOCUMENTS.len() * copies).enumerate() {
        index.add(doc_id as u64, doc).unwrap();
    }
    index
}

/// Remove `<mark ...>` and `</mark>` tags from highlight output
pub fn strip_marks(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find("<mark") {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let end = after.find('>').map(|i| i + 1).unwrap_or(after.len());
        rest = &after[end..];
    }
    out.push_str(rest);
    out.replace("</mark>", "")
}

/// Number of `<mark` elements in highlight output
pub fn count_marks(markup: &str) -> usize {
    markup.matches("<mark").count()
}
