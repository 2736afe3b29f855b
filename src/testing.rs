// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::Document;
use crate::widget::SearchWidget;
use crate::WidgetConfig;

/// A document with the usual `url` and `title` derived from `id`.
pub fn make_doc(id: usize, text: &str) -> Document {
    Document::new(id.to_string(), format!("/doc/{}", id), format!("Doc {}", id)).with_text(text)
}

/// `n` documents that all contain `term`.
pub fn make_docs_containing(n: usize, term: &str) -> Vec<Document> {
    (0..n)
        .map(|id| make_doc(id, &format!("document {} mentions {} once", id, term)))
        .collect()
}

/// A loaded widget with the default config.
pub fn loaded_widget(docs: Vec<Document>) -> SearchWidget {
    SearchWidget::from_documents(WidgetConfig::default(), docs).expect("test index should build")
}

/// The document from the page's smoke test.
pub fn fox_doc() -> Document {
    Document::new("1", "/a", "Intro").with_text("The quick brown fox jumps over the lazy dog")
}
