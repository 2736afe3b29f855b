// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search over a static site's `search_index.json`.
//!
//! The page ships a JSON array of documents. This crate loads it, builds an
//! in-memory full-text index, and turns every keystroke in the search box into
//! a list of links with a highlighted snippet.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  loader.rs  │────▶│  index/      │────▶│    widget.rs     │
//! │ (parse,     │     │ (IndexBuilder│     │ (SearchWidget,   │
//! │  read,fetch)│     │  → tantivy)  │     │  on_input)       │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!                                                   ▼
//!                                          ┌──────────────────┐
//!                                          │   snippet.rs     │
//!                                          │ (extract, html)  │
//!                                          └──────────────────┘
//! ```
//!
//! | Module     | Role                                              |
//! |------------|---------------------------------------------------|
//! | `types`    | `Document`, `SearchResult`, `ResultEntry`         |
//! | `loader`   | JSON body / file / URL → `Vec<Document>`          |
//! | `index`    | `FullTextIndex` seam, tantivy-backed builder      |
//! | `snippet`  | excerpt window around the first literal match     |
//! | `widget`   | state, input handling, result containers          |
//! | `config`   | `WidgetConfig` and the defaults behind it         |
//!
//! # Usage
//!
//! ```
//! use pagesearch::{Document, HtmlContainer, SearchWidget, WidgetConfig};
//!
//! let docs = vec![Document::new("1", "/a", "Intro")
//!     .with_text("The quick brown fox jumps over the lazy dog")];
//! let widget = SearchWidget::from_documents(WidgetConfig::default(), docs).unwrap();
//!
//! let mut results = HtmlContainer::new(widget.config());
//! assert_eq!(widget.on_input("  fox ", &mut results), 1);
//! assert!(results.as_str().contains("<mark>fox</mark>"));
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod snippet;
pub mod types;
pub mod utils;
pub mod widget;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod runtime;

pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use index::{
    build_document_index, FieldStats, FullTextIndex, IndexBuilder, IndexStats, Indexable,
    InvertedIndex,
};
pub use loader::{parse_documents, read_documents, IndexSource};
pub use snippet::{Snippet, SnippetWindow};
pub use types::{Document, ResultEntry, SearchResult};
pub use widget::{HtmlContainer, ResultsContainer, SearchWidget};

#[cfg(feature = "wasm")]
pub use runtime::wasm::SearchWidget as WasmSearchWidget;
