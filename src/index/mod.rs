// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The full-text index behind the widget.
//!
//! The widget only needs something it can hand a query string to and get
//! ranked refs back, so that is all [`FullTextIndex`] asks for. The crate's
//! implementation is [`InvertedIndex`], a tantivy index in RAM built through
//! [`IndexBuilder`]: one ref field, a list of searchable fields, then every
//! document.
//!
//! Tokenizing, ranking (BM25) and the query syntax are tantivy's:
//!
//! | Syntax          | Meaning                                  |
//! |-----------------|------------------------------------------|
//! | `fox dog`       | either term                              |
//! | `+fox -dog`     | `fox` required, `dog` excluded           |
//! | `title:fox`     | only the `title` field                   |
//! | `dog^2.0`       | boost the clause                         |
//! | `"brown fox"`   | phrase                                   |
//!
//! ```
//! use pagesearch::{Document, FullTextIndex, IndexBuilder};
//!
//! let docs = vec![
//!     Document::new("1", "/a", "Intro").with_text("The quick brown fox"),
//! ];
//! let mut builder = IndexBuilder::new().ref_field("id").field("title").field("text");
//! for doc in &docs {
//!     builder.add(doc);
//! }
//! let index = builder.build().unwrap();
//!
//! let results = index.search("fox").unwrap();
//! assert_eq!(results[0].doc_ref, "1");
//! ```

mod inverted;

pub use inverted::*;

use crate::error::Result;
use crate::types::{Document, SearchResult};

/// Boost for the `title` field. Short titles that match should outrank long
/// bodies that mention the term once.
pub const TITLE_BOOST: f32 = 10.0;

/// Boost for the `text` field.
pub const TEXT_BOOST: f32 = 1.0;

/// Anything that can answer a query with ranked document refs.
///
/// Results come back best first. Callers must not assume every ref resolves.
pub trait FullTextIndex {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// A record the builder can pull named fields out of.
pub trait Indexable {
    fn field(&self, name: &str) -> Option<&str>;
}

impl Indexable for Document {
    fn field(&self, name: &str) -> Option<&str> {
        Document::field(self, name)
    }
}

/// Build the index the widget uses: ref `id`, fields `title` and `text`.
pub fn build_document_index(docs: &[Document]) -> Result<InvertedIndex> {
    let mut builder = IndexBuilder::new()
        .ref_field("id")
        .field_with_boost("title", TITLE_BOOST)
        .field_with_boost("text", TEXT_BOOST);
    for doc in docs {
        builder.add(doc);
    }
    builder.build()
}
