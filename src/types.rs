// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the widget.
//!
//! | Type           | Lifetime          | Produced by                 |
//! |----------------|-------------------|-----------------------------|
//! | `Document`     | whole page        | `loader` (search_index.json) |
//! | `SearchResult` | one query         | `FullTextIndex::search`     |
//! | `ResultEntry`  | one query         | `SearchWidget` rendering    |
//!
//! # Invariants
//!
//! - **SearchResult**: `doc_ref` names the `id` of a document that was added to
//!   the index. The widget still tolerates a dangling ref and skips it.
//! - **Document**: immutable once loaded. Nothing in the crate hands out
//!   `&mut Document` after the widget owns the collection.

use crate::snippet::Snippet;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One page record from `search_index.json`.
///
/// Unknown keys are kept in `extra` so they can be registered as searchable
/// fields on the index builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Body text. Absent or `null` means the result renders without a snippet.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            url: url.into(),
            title: title.into(),
            text: None,
            extra: Map::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Look up a field by name, the way the index builder sees documents.
    ///
    /// Extra fields resolve only when they hold a JSON string.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "url" => Some(&self.url),
            "title" => Some(&self.title),
            "text" => self.text.as_deref(),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }
}

/// Accept `"id": "intro"` as well as `"id": 7`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// `null` reads as an empty string; the page renders it as empty text too.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A ranked hit as returned by the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The `id` of the matching document.
    #[serde(rename = "ref")]
    pub doc_ref: String,
    pub score: f64,
}

/// What the widget renders for one result: a link and a snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub href: String,
    pub title: String,
    pub snippet: Snippet,
}
