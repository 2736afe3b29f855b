// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading `search_index.json`.
//!
//! The body is a JSON array of documents. It can come from disk, from an HTTP
//! URL (feature `fetch`), or, in the browser, from the JS loader which fetches
//! the text and hands it to [`parse_documents`].

use crate::error::{Error, Result};
use crate::types::Document;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where the document index lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    Path(PathBuf),
    Url(String),
}

impl FromStr for IndexSource {
    type Err = std::convert::Infallible;

    /// `http://` and `https://` are URLs, everything else is a path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(IndexSource::Url(s.to_string()))
        } else {
            Ok(IndexSource::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for IndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSource::Path(path) => write!(f, "{}", path.display()),
            IndexSource::Url(url) => f.write_str(url),
        }
    }
}

/// Parse an index body into documents.
pub fn parse_documents(body: &[u8]) -> Result<Vec<Document>> {
    let docs: Vec<Document> = serde_json::from_slice(body)?;
    Ok(docs)
}

/// Read and parse an index file.
pub fn read_documents(path: &Path) -> Result<Vec<Document>> {
    let body = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let docs = parse_documents(&body)?;
    tracing::debug!(path = %path.display(), docs = docs.len(), "read search index");
    Ok(docs)
}

/// GET the index over HTTP. Non-2xx statuses are errors.
#[cfg(feature = "fetch")]
pub async fn fetch_documents(client: &reqwest::Client, url: &str) -> Result<Vec<Document>> {
    let fetch_err = |source| Error::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(fetch_err)?;
    let docs = parse_documents(&body)?;
    tracing::debug!(url, docs = docs.len(), bytes = body.len(), "fetched search index");
    Ok(docs)
}

/// HTTP client used for index fetches.
#[cfg(feature = "fetch")]
pub fn http_client() -> Result<reqwest::Client> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    reqwest::Client::builder()
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|source| Error::Fetch {
            url: String::new(),
            source,
        })
}

/// Load documents from any source.
#[cfg(feature = "fetch")]
pub async fn load_documents(source: &IndexSource) -> Result<Vec<Document>> {
    match source {
        IndexSource::Path(path) => read_documents(path),
        IndexSource::Url(url) => fetch_documents(&http_client()?, url).await,
    }
}
