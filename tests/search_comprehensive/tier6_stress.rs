//! Tier 6: Stress
//!
//! The recipe corpus at benchmark scale. Opt-in with `--ignored`.

use crate::test_utils::*;
use hashedix::{HighlightOptions, QueryOptions};

const QUERIES: &[&str] = &[
    "tofu",
    "egg",
    "garlic",
    "mushroom",
    "beans",
    "onion",
    "carrot",
    "daal",
    "bread",
    "nonexistent",
    "crème",
    "kebab",
    "bell pepper",
];

#[test]
#[ignore]
fn stress_recipe_corpus() {
    let copies = 100;
    let index = recipe_index(copies);
    assert_eq!(index.store().total_docs(), RECIPE_DOCUMENTS.len() * copies);

    for (query_id, query) in QUERIES.iter().cycle().take(QUERIES.len() * copies).enumerate() {
        index
            .query(query, &QueryOptions::new().with_limit(5))
            .unwrap();
        let hits = index.query(query, &QueryOptions::new().unbounded()).unwrap();
        assert!(
            !hits.is_empty() || *query == "mushroom" || *query == "nonexistent",
            "no hits for {}",
            query
        );

        if let Some(top) = hits.first() {
            let doc = RECIPE_DOCUMENTS[query_id % RECIPE_DOCUMENTS.len()];
            index
                .highlight(doc, &top.terms, &HighlightOptions::default())
                .unwrap();
        }
    }
}
