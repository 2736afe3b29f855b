// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate error type.
//!
//! Everything fallible in the library funnels into [`Error`]. The binary wraps
//! it in `anyhow` at the boundary; the wasm bindings turn it into a `JsValue`
//! string.

use std::path::PathBuf;

/// Errors raised while loading an index or running a query.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The index file could not be read from disk.
    #[error("failed to read index file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index body is not a JSON array of documents.
    #[error("invalid search index JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP request for the index failed before a response arrived.
    #[cfg(feature = "fetch")]
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The index URL answered with a non-success status.
    #[error("request for {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Building or reading the full-text index failed.
    #[error("full-text index error: {0}")]
    Index(#[from] tantivy::TantivyError),

    /// The query string could not be parsed.
    #[error("invalid query {query:?}: {message}")]
    QueryParse { query: String, message: String },

    /// A search was requested before the document index finished loading.
    #[error("search index is not loaded yet")]
    NotReady,
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn query_parse(query: &str, message: impl Into<String>) -> Self {
        Error::QueryParse {
            query: query.to_string(),
            message: message.into(),
        }
    }
}
