//! Tier 5: Property-Based Tests
//!
//! Invariants that must hold for arbitrary documents and term sets.

use crate::test_utils::*;
use hashedix::markup::escape;
use hashedix::{tokenize, AnalyzerConfig, HighlightOptions, Highlighter, Term};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("onion".to_string()),
        Just("onions".to_string()),
        Just("red".to_string()),
        Just("Red".to_string()),
        Just("bell".to_string()),
        Just("pepper".to_string()),
        Just("daal".to_string()),
        "[a-z]{1,6}",
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("   ".to_string()),
        Just(", ".to_string()),
        Just(" & ".to_string()),
        Just(" <".to_string()),
        Just(">.".to_string()),
        Just("\n".to_string()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec((word(), separator()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, s)| format!("{}{}", w, s))
            .collect()
    })
}

fn term() -> impl Strategy<Value = Term> {
    prop::collection::vec(word(), 0..4).prop_map(Term::new)
}

fn config() -> AnalyzerConfig {
    AnalyzerConfig::default()
        .with_stemmer(plural_stemmer)
        .with_stopwords(["whole"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Removing the marks gives back the escaped input
    #[test]
    fn tier5_marks_wrap_original_text(
        doc in document(),
        terms in prop::collection::vec(term(), 0..5),
        case_sensitive in any::<bool>(),
    ) {
        let config = config();
        let options = HighlightOptions::new().with_case_sensitive(case_sensitive);
        let markup = Highlighter::new(&config).highlight(&doc, &terms, &options);
        prop_assert_eq!(strip_marks(&markup), escape(&doc));
    }

    /// No terms means no markup
    #[test]
    fn tier5_empty_terms_is_escape(doc in document()) {
        let config = config();
        let markup = Highlighter::new(&config).highlight(&doc, &[], &HighlightOptions::default());
        prop_assert_eq!(markup, escape(&doc));
    }

    /// match_limit is an upper bound on marks
    #[test]
    fn tier5_match_limit_bounds_marks(
        doc in document(),
        terms in prop::collection::vec(term(), 1..5),
        limit in 0usize..4,
    ) {
        let config = config();
        let options = HighlightOptions::new().with_match_limit(limit);
        let markup = Highlighter::new(&config).highlight(&doc, &terms, &options);
        prop_assert!(count_marks(&markup) <= limit);
    }

    /// Highlighting is a pure function of its inputs
    #[test]
    fn tier5_highlight_deterministic(
        doc in document(),
        terms in prop::collection::vec(term(), 0..5),
    ) {
        let config = config();
        let highlighter = Highlighter::new(&config);
        let a = highlighter.highlight(&doc, &terms, &HighlightOptions::default());
        let b = highlighter.highlight(&doc, &terms, &HighlightOptions::default());
        prop_assert_eq!(a, b);
    }

    /// Tokenizing twice yields the same terms, each within the window
    #[test]
    fn tier5_tokenize_deterministic(doc in document(), ngrams in 1usize..6) {
        let config = config().with_ngrams(ngrams);
        let a: Vec<Term> = tokenize(&doc, &config).collect();
        let b: Vec<Term> = tokenize(&doc, &config).collect();
        prop_assert_eq!(&a, &b);
        prop_assert!(a.iter().all(|t| !t.is_empty() && t.len() <= ngrams));
    }

    /// Every unigram of a document marks itself
    #[test]
    fn tier5_indexed_unigrams_highlight(doc in document()) {
        let config = config();
        let unigrams: Vec<Term> = tokenize(&doc, &config).filter(|t| t.len() == 1).collect();
        prop_assume!(!unigrams.is_empty());

        let options = HighlightOptions::new().with_case_sensitive(false);
        let markup = Highlighter::new(&config).highlight(&doc, &unigrams, &options);
        prop_assert_eq!(count_marks(&markup), unigrams.len());
    }
}
