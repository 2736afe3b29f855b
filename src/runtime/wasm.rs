// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widget.
//!
//! ```js
//! const widget = new SearchWidget({ maxResults: 20 });
//! widget.load(await (await fetch("search_index.json")).text());
//!
//! box.addEventListener("input", () => {
//!     widget.onInput(
//!         box.value,
//!         () => results.replaceChildren(),
//!         (entry) => results.append(renderEntry(entry)),
//!     );
//! });
//! ```
//!
//! `onAppend` receives `{ href, title, snippetHtml }`. `snippetHtml` is already
//! escaped (or raw, with `trustedMarkup`), so it can go into `innerHTML`.

use crate::config::WidgetConfig;
use crate::loader::parse_documents;
use crate::types::ResultEntry;
use crate::widget::{ResultsContainer, SearchWidget as Widget};
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// One result as JavaScript sees it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsResultEntry {
    href: String,
    title: String,
    snippet: String,
    snippet_html: String,
}

impl JsResultEntry {
    fn from_entry(entry: &ResultEntry, trusted_markup: bool) -> Self {
        let snippet_html = if trusted_markup {
            entry.snippet.text.clone()
        } else {
            entry.snippet.to_html()
        };
        Self {
            href: entry.href.clone(),
            title: entry.title.clone(),
            snippet: entry.snippet.text.clone(),
            snippet_html,
        }
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Forwards container calls to JS callbacks.
///
/// `ResultsContainer` can't fail, so the first callback error is parked here
/// and reported once the input event is done.
struct CallbackContainer<'a> {
    on_clear: &'a Function,
    on_append: &'a Function,
    trusted_markup: bool,
    error: Option<JsValue>,
}

impl CallbackContainer<'_> {
    fn record(&mut self, result: Result<JsValue, JsValue>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl ResultsContainer for CallbackContainer<'_> {
    fn clear(&mut self) {
        let result = self.on_clear.call0(&JsValue::NULL);
        self.record(result);
    }

    fn append(&mut self, entry: &ResultEntry) {
        let result = to_value(&JsResultEntry::from_entry(entry, self.trusted_markup))
            .map_err(js_error)
            .and_then(|value| self.on_append.call1(&JsValue::NULL, &value));
        self.record(result);
    }
}

/// The widget, exported to JavaScript.
#[wasm_bindgen]
pub struct SearchWidget {
    inner: Widget,
}

#[wasm_bindgen]
impl SearchWidget {
    /// Create an unloaded widget. `options` is an optional `WidgetConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<SearchWidget, JsValue> {
        let config: WidgetConfig = if options.is_undefined() || options.is_null() {
            WidgetConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        };
        Ok(SearchWidget {
            inner: Widget::new(config),
        })
    }

    /// Parse the body of `search_index.json` and build the index.
    ///
    /// On error the widget keeps whatever state it had before.
    #[wasm_bindgen]
    pub fn load(&mut self, json: &str) -> Result<(), JsValue> {
        let docs = parse_documents(json.as_bytes()).map_err(js_error)?;
        self.inner.load(docs).map_err(js_error)
    }

    #[wasm_bindgen(js_name = "isReady")]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.inner.documents().len()
    }

    /// The config in effect, as a plain object.
    #[wasm_bindgen]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.config()).map_err(js_error)
    }

    /// Entries for `query` as an array, without any rendering.
    ///
    /// Throws before `load` and on malformed query syntax.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let trusted = self.inner.config().trusted_markup;
        let entries: Vec<JsResultEntry> = self
            .inner
            .query(query)
            .map_err(js_error)?
            .iter()
            .map(|entry| JsResultEntry::from_entry(entry, trusted))
            .collect();
        to_value(&entries).map_err(js_error)
    }

    /// Handle an input event. Returns how many entries were appended.
    #[wasm_bindgen(js_name = "onInput")]
    pub fn on_input(
        &self,
        value: &str,
        on_clear: &Function,
        on_append: &Function,
    ) -> Result<usize, JsValue> {
        let mut container = CallbackContainer {
            on_clear,
            on_append,
            trusted_markup: self.inner.config().trusted_markup,
            error: None,
        };
        let rendered = self.inner.on_input(value, &mut container);
        match container.error {
            Some(err) => Err(err),
            None => Ok(rendered),
        }
    }
}
