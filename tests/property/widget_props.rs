//! Widget and index properties over random corpora.
//!
//! - every document containing a term is found by that term
//! - results come back best first
//! - the container never holds more than `max_results` entries
//! - every rendered entry belongs to a loaded document

use crate::common::make_doc;
use pagesearch::{build_document_index, Document, FullTextIndex, ResultEntry, SearchWidget, WidgetConfig};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}").unwrap()
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..12).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(document_strategy(), 1..80).prop_map(|texts| {
        texts
            .iter()
            .enumerate()
            .map(|(id, text)| make_doc(id, text))
            .collect()
    })
}

/// Titles are "Doc N", so "doc" is a title term of every document.
fn contains_word(doc: &Document, word: &str) -> bool {
    let title = doc.title.to_lowercase();
    title
        .split(' ')
        .chain(doc.text.as_deref().unwrap_or("").split(' '))
        .any(|w| w == word)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Property: A single-term query finds exactly the documents holding it.
    #[test]
    fn prop_term_query_is_complete(docs in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let doc = &docs[pick.index(docs.len())];
        let words: Vec<&str> = doc.text.as_deref().unwrap_or("").split(' ').collect();
        let word = words[pick.index(words.len())];

        let index = build_document_index(&docs).unwrap();
        let mut found: Vec<String> = index.search(word).unwrap().into_iter().map(|r| r.doc_ref).collect();
        found.sort();
        let mut expected: Vec<String> = docs.iter().filter(|d| contains_word(d, word)).map(|d| d.id.clone()).collect();
        expected.sort();

        prop_assert_eq!(found, expected);
    }

    /// Property: Scores never increase down the result list.
    #[test]
    fn prop_results_best_first(docs in corpus_strategy(), query in prop::collection::vec(word_strategy(), 1..4)) {
        let index = build_document_index(&docs).unwrap();
        let hits = index.search(&query.join(" ")).unwrap();
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score, "{} < {}", pair[0].score, pair[1].score);
        }
    }

    /// Property: The container holds at most `max_results` entries, all real.
    #[test]
    fn prop_rendered_entries_bounded_and_resolved(
        docs in corpus_strategy(),
        max_results in 1usize..60,
        word in word_strategy(),
    ) {
        let config = WidgetConfig { max_results, ..WidgetConfig::default() };
        let widget = SearchWidget::from_documents(config, docs.clone()).unwrap();
        let mut out: Vec<ResultEntry> = Vec::new();

        // Every title holds "doc", so the cap is actually reached
        let rendered = widget.on_input(&format!("doc {}", word), &mut out);
        prop_assert_eq!(rendered, docs.len().min(max_results));
        prop_assert_eq!(rendered, out.len());
        prop_assert!(out.len() <= max_results);
        for entry in &out {
            prop_assert!(docs.iter().any(|d| d.url == entry.href && d.title == entry.title));
        }
    }

    /// Property: Prohibiting a term removes every document holding it.
    #[test]
    fn prop_prohibited_term_is_absent(docs in corpus_strategy(), word in word_strategy()) {
        let index = build_document_index(&docs).unwrap();
        let hits = index.search(&format!("doc -{}", word)).unwrap();
        for hit in &hits {
            let doc = docs.iter().find(|d| d.id == hit.doc_ref).unwrap();
            prop_assert!(!contains_word(doc, &word));
        }
        let holding = docs.iter().filter(|d| contains_word(d, &word)).count();
        prop_assert_eq!(hits.len() + holding, docs.len());
    }
}
