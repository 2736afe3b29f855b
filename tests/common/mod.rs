//! Shared test utilities and fixtures.

#![allow(dead_code)]

use pagesearch::{read_documents, Document, HtmlContainer, SearchWidget, WidgetConfig};
use std::path::Path;

// Re-export canonical test utilities from pagesearch::testing
pub use pagesearch::testing::{fox_doc, loaded_widget, make_doc, make_docs_containing};

/// Small multilingual index with one document per interesting case.
pub const FIXTURE_INDEX: &str = "data/search_index.json";

pub fn fixture_docs() -> Vec<Document> {
    read_documents(Path::new(FIXTURE_INDEX)).expect("fixture index should parse")
}

pub fn fixture_widget() -> SearchWidget {
    SearchWidget::from_documents(WidgetConfig::default(), fixture_docs()).expect("fixture index should build")
}

/// Run one input event and return the rendered markup.
pub fn render(widget: &SearchWidget, input: &str) -> String {
    let mut out = HtmlContainer::new(widget.config());
    widget.on_input(input, &mut out);
    out.into_string()
}

/// Titles of the entries `query` produces, in order.
pub fn titles(widget: &SearchWidget, query: &str) -> Vec<String> {
    widget
        .query(query)
        .expect("query should succeed")
        .into_iter()
        .map(|e| e.title)
        .collect()
}
