// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query language.
//!
//! Whatever lands in the search box either parses or comes back as a
//! `QueryParse` error. It never panics, and results always point at indexed
//! documents in best-first order.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pagesearch::{build_document_index, Document, Error, FullTextIndex, InvertedIndex};
use std::sync::OnceLock;

const IDS: &[&str] = &["1", "2", "3", "4"];

fn index() -> &'static InvertedIndex {
    static INDEX: OnceLock<InvertedIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let docs = [
            ("1", "Intro", "The quick brown fox jumps over the lazy dog"),
            ("2", "Kurulum", "Paketi kurmak için önce derleyiciyi güncelleyin."),
            ("3", "Yapılandırma", "Arama kutusunun kimliği burada değiştirilebilir."),
            ("4", "Fox facts", "A fox is a small omnivore. Foxes live everywhere."),
        ]
        .iter()
        .map(|(id, title, text)| Document::new(*id, format!("/{}", id), *title).with_text(*text))
        .collect::<Vec<_>>();
        build_document_index(&docs).unwrap()
    })
}

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    // Long inputs only slow the run down
    let query: String = query.chars().take(200).collect();

    match index().search(&query) {
        Ok(hits) => {
            // INVARIANT 1: every ref is an indexed document
            for hit in &hits {
                assert!(IDS.contains(&hit.doc_ref.as_str()));
                assert!(hit.score.is_finite());
            }
            // INVARIANT 2: best first
            for pair in hits.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
        Err(Error::QueryParse { .. }) => {}
        Err(other) => panic!("unexpected error kind: {}", other),
    }
});
