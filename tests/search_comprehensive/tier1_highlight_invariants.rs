//! Tier 1: Highlight Invariants
//!
//! Markup is produced against the original text, escaped, and never
//! contains partial matches.

use crate::test_utils::*;
use hashedix::{AnalyzerConfig, HighlightOptions, Highlighter, SearchIndex, Term};

fn stemmed_index() -> SearchIndex {
    init_tracing();
    SearchIndex::new(AnalyzerConfig::default().with_stemmer(plural_stemmer)).unwrap()
}

fn highlight(index: &SearchIndex, doc: &str, terms: &[Term]) -> String {
    index
        .highlight(doc, terms, &HighlightOptions::default())
        .unwrap()
}

// ============================================================================
// Escaping
// ============================================================================

/// Empty term set returns the input escaped and otherwise byte-identical
#[test]
fn tier1_empty_terms_round_trip() {
    let index = stemmed_index();
    for doc in RECIPE_DOCUMENTS {
        assert_eq!(highlight(&index, doc, &[]), hashedix::markup::escape(doc));
    }
    assert_eq!(highlight(&index, "egg & bacon", &[]), "egg &amp; bacon");
}

/// Content inside and outside marks is escaped
#[test]
fn tier1_markup_is_escaped() {
    let index = stemmed_index();
    let out = highlight(&index, "<b>egg</b> & bacon", &[Term::from(["egg"])]);
    assert_eq!(out, "&lt;b&gt;<mark>egg</mark>&lt;/b&gt; &amp; bacon");
}

// ============================================================================
// Matching
// ============================================================================

/// Whitespace runs do not affect matching
#[test]
fn tier1_whitespace_transparency() {
    let index = stemmed_index();
    let out = highlight(&index, "five   onions, diced", &[Term::from(["onion"])]);
    assert_eq!(out, "five   <mark>onions</mark>, diced");
}

/// Casing of the original text is preserved inside marks
#[test]
fn tier1_case_insensitive_preserves_casing() {
    let index = stemmed_index();
    let options = HighlightOptions::new().with_case_sensitive(false);
    let out = index
        .highlight("Wine", &[Term::from(["wine"])], &options)
        .unwrap();
    assert_eq!(out, "<mark>Wine</mark>");
}

/// A mismatched-case phrase leaves the text unmarked
#[test]
fn tier1_partial_match_rejected() {
    let index = stemmed_index();
    let doc = "Place in Dutch oven...";
    assert_eq!(highlight(&index, doc, &[Term::from(["dutch", "oven"])]), doc);
}

/// Repeated terms are each marked
#[test]
fn tier1_repeat_non_overlapping_matches() {
    let index = stemmed_index();
    let out = highlight(&index, "daal daal daal", &[Term::from(["daal"])]);
    assert_eq!(out, "<mark>daal</mark> <mark>daal</mark> <mark>daal</mark>");
}

/// The candidate whose full sequence is satisfied wins
#[test]
fn tier1_ambiguous_prefix_tie_break() {
    let index = stemmed_index();
    let terms = [Term::from(["food", "processor"]), Term::from(["food", "mill"])];
    assert_eq!(highlight(&index, "food mill.", &terms), "<mark>food mill</mark>.");
}

/// A term longer than the remaining input never matches
#[test]
fn tier1_term_longer_than_input() {
    let index = stemmed_index();
    assert_eq!(highlight(&index, "tofu", &[Term::from(["pack", "tofu"])]), "tofu");
}

/// Multiple phrase terms in one document
#[test]
fn tier1_phrase_terms() {
    let index = stemmed_index();
    let cases: &[(&str, Vec<Term>, &str)] = &[
        (
            "can of baked beans",
            vec![Term::from(["baked", "bean"])],
            "can of <mark>baked beans</mark>",
        ),
        (
            "put the skewers in the frying pan",
            vec![Term::from(["skewer"]), Term::from(["frying", "pan"])],
            "put the <mark>skewers</mark> in the <mark>frying pan</mark>",
        ),
        (
            "put the kebab skewers in the pan",
            vec![Term::from(["kebab", "skewer"]), Term::from(["pan"])],
            "put the <mark>kebab skewers</mark> in the <mark>pan</mark>",
        ),
    ];
    for (doc, terms, expected) in cases {
        assert_eq!(&highlight(&index, doc, terms), expected, "doc: {}", doc);
    }
}

/// Zero-length terms are inert
#[test]
fn tier1_zero_length_term() {
    let index = stemmed_index();
    let out = highlight(&index, "one carrot", &[Term::default()]);
    assert_eq!(out, "one carrot");
}

/// Terms opening with a separator never match
#[test]
fn tier1_separator_first_term() {
    let index = stemmed_index();
    let out = highlight(&index, "egg & bacon", &[Term::from(["&", "bacon"])]);
    assert_eq!(out, "egg &amp; bacon");
}

// ============================================================================
// Options
// ============================================================================

/// match_limit caps the number of marks
#[test]
fn tier1_match_limit() {
    let index = stemmed_index();
    let options = HighlightOptions::new().with_match_limit(1);
    let out = index
        .highlight("daal daal daal", &[Term::from(["daal"])], &options)
        .unwrap();
    assert_eq!(count_marks(&out), 1);
    assert_eq!(out, "<mark>daal</mark> daal daal");
}

/// Attributes render in a stable order
#[test]
fn tier1_term_attributes_stable() {
    let config = AnalyzerConfig::default();
    let term = Term::from(["garlic"]);
    let options = HighlightOptions::new()
        .with_term_attributes(term.clone(), [("z", "1"), ("a", "2"), ("m", "3")]);

    let first = Highlighter::new(&config).highlight("garlic", &[term.clone()], &options);
    for _ in 0..10 {
        let again = Highlighter::new(&config).highlight("garlic", &[term.clone()], &options);
        assert_eq!(again, first);
    }
    assert_eq!(first, "<mark a=\"2\" m=\"3\" z=\"1\">garlic</mark>");
}

// ============================================================================
// Synonyms
// ============================================================================

/// A synonym key is marked when a term covers its whole expansion
#[test]
fn tier1_synonym_expansion_marked_on_original() {
    let config = AnalyzerConfig::default().with_synonyms([("soymilk", "soy milk")]);
    let index = SearchIndex::new(config).unwrap();

    let out = highlight(&index, "Warm the soymilk.", &[Term::from(["soy", "milk"])]);
    assert_eq!(out, "Warm the <mark>soymilk</mark>.");

    let out = highlight(&index, "Warm the soymilk.", &[Term::from(["milk"])]);
    assert_eq!(out, "Warm the soymilk.");
}

/// Terms produced by indexing highlight the same document
#[test]
fn tier1_indexed_terms_highlight_source() {
    let index = recipe_index(1);
    let doc = "sliced red bell pepper as filling";
    let hits = index
        .query("bell pepper", &hashedix::QueryOptions::default())
        .unwrap();
    assert!(!hits.is_empty());

    let out = highlight(&index, doc, &hits[0].terms);
    assert_eq!(out, "sliced red <mark>bell pepper</mark> as filling");
}
