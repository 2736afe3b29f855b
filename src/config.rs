// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration and the constants behind its defaults.
//!
//! The wasm constructor deserializes [`WidgetConfig`] from a JS object, the CLI
//! builds one from flags. Every field has a default, so `{}` is a valid config.

use crate::snippet::SnippetWindow;
use serde::{Deserialize, Serialize};

/// Index location relative to the page.
pub const DEFAULT_INDEX_URL: &str = "search_index.json";

/// Id of the text input the widget listens on.
pub const DEFAULT_SEARCH_BOX_ID: &str = "search-box";

/// Id of the element results are rendered into.
pub const DEFAULT_RESULTS_ID: &str = "results";

/// CSS class of each rendered result block.
pub const DEFAULT_RESULT_CLASS: &str = "result";

/// Results rendered per query, whatever the index returns.
pub const MAX_RESULTS: usize = 50;

/// Characters of context kept before a match.
pub const SNIPPET_LEAD_CHARS: usize = 60;

/// Window size around a match.
pub const SNIPPET_WIDTH_CHARS: usize = 260;

/// Head of the text shown when the query is not a literal substring.
pub const SNIPPET_FALLBACK_CHARS: usize = 200;

pub const DEFAULT_ELLIPSIS: &str = "...";

/// Everything the widget needs to know besides the documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub index_url: String,
    pub search_box_id: String,
    pub results_id: String,
    pub result_class: String,
    pub max_results: usize,
    /// Insert snippet text as raw markup instead of escaping it.
    ///
    /// Only safe when every document in the index comes from a trusted build.
    pub trusted_markup: bool,
    pub snippet: SnippetWindow,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            search_box_id: DEFAULT_SEARCH_BOX_ID.to_string(),
            results_id: DEFAULT_RESULTS_ID.to_string(),
            result_class: DEFAULT_RESULT_CLASS.to_string(),
            max_results: MAX_RESULTS,
            trusted_markup: false,
            snippet: SnippetWindow::default(),
        }
    }
}
