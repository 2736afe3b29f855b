// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search widget: state plus the input handler.
//!
//! A [`SearchWidget`] starts out unloaded. Input events are ignored until
//! [`SearchWidget::load`] hands it the documents, after which every input runs
//! the same steps:
//!
//! 1. trim the value
//! 2. clear the container
//! 3. empty query → stop
//! 4. search, keep the first `max_results` hits in index order
//! 5. resolve each ref to its document (dangling refs are skipped)
//! 6. append a link + snippet entry per hit
//!
//! Where entries go is up to the [`ResultsContainer`]: the DOM in the browser,
//! a string of markup for tests and `--format html`, the terminal in the CLI.

use crate::config::WidgetConfig;
use crate::error::{Error, Result};
use crate::index::{build_document_index, FullTextIndex, InvertedIndex};
use crate::snippet::extract;
use crate::types::{Document, ResultEntry};
use crate::utils::escape_html;
use std::collections::HashMap;

/// Somewhere results get rendered.
pub trait ResultsContainer {
    /// Remove everything rendered so far.
    fn clear(&mut self);
    /// Render one result after the existing ones.
    fn append(&mut self, entry: &ResultEntry);
}

/// Collects entries in memory. Handy for tests and JSON output.
impl ResultsContainer for Vec<ResultEntry> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, entry: &ResultEntry) {
        self.push(entry.clone());
    }
}

/// Documents and the index built over them, present once loading finished.
#[derive(Debug)]
struct Loaded<I> {
    docs: Vec<Document>,
    by_id: HashMap<String, usize>,
    index: I,
}

/// Owns the documents, the index and the configuration for one page.
#[derive(Debug)]
pub struct SearchWidget<I = InvertedIndex> {
    config: WidgetConfig,
    state: Option<Loaded<I>>,
}

impl SearchWidget<InvertedIndex> {
    /// Index `docs` on `title` and `text`, keyed by `id`.
    ///
    /// If building the index fails the widget keeps its previous state.
    pub fn load(&mut self, docs: Vec<Document>) -> Result<()> {
        let index = build_document_index(&docs)?;
        self.load_with_index(docs, index);
        Ok(())
    }

    /// Build a ready widget in one go.
    pub fn from_documents(config: WidgetConfig, docs: Vec<Document>) -> Result<Self> {
        let mut widget = SearchWidget::new(config);
        widget.load(docs)?;
        Ok(widget)
    }

    pub fn index(&self) -> Option<&InvertedIndex> {
        self.state.as_ref().map(|s| &s.index)
    }
}

impl<I: FullTextIndex> SearchWidget<I> {
    /// An unloaded widget. Input is a no-op until a `load` call.
    pub fn new(config: WidgetConfig) -> Self {
        SearchWidget {
            config,
            state: None,
        }
    }

    /// Install documents together with an index built elsewhere.
    ///
    /// When ids repeat, the first document with that id is the one results
    /// resolve to.
    pub fn load_with_index(&mut self, docs: Vec<Document>, index: I) {
        let mut by_id = HashMap::with_capacity(docs.len());
        for (pos, doc) in docs.iter().enumerate() {
            if by_id.contains_key(&doc.id) {
                tracing::warn!(id = %doc.id, "duplicate document id; keeping the first");
                continue;
            }
            by_id.insert(doc.id.clone(), pos);
        }
        tracing::debug!(docs = docs.len(), "search index loaded");
        self.state = Some(Loaded { docs, by_id, index });
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_some()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn documents(&self) -> &[Document] {
        self.state.as_ref().map_or(&[][..], |s| s.docs.as_slice())
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        let state = self.state.as_ref()?;
        state.by_id.get(id).map(|&pos| &state.docs[pos])
    }

    /// Entries for `raw`, without touching any container.
    ///
    /// Fails with [`Error::NotReady`] before `load` and with
    /// [`Error::QueryParse`] on malformed syntax. An empty query gives no entries.
    pub fn query(&self, raw: &str) -> Result<Vec<ResultEntry>> {
        let state = self.state.as_ref().ok_or(Error::NotReady)?;
        let query = raw.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let hits = state.index.search(query)?;
        let total = hits.len();

        let entries: Vec<ResultEntry> = hits
            .into_iter()
            .take(self.config.max_results)
            .filter_map(|hit| {
                let Some(&pos) = state.by_id.get(&hit.doc_ref) else {
                    tracing::warn!(doc_ref = %hit.doc_ref, "result has no matching document; skipping");
                    return None;
                };
                let doc = &state.docs[pos];
                Some(ResultEntry {
                    href: doc.url.clone(),
                    title: doc.title.clone(),
                    snippet: extract(doc.text.as_deref(), query, &self.config.snippet),
                })
            })
            .collect();

        tracing::debug!(query, total, rendered = entries.len(), "query");
        Ok(entries)
    }

    /// Handle an input event: clear `out`, then render the matches for `raw`.
    ///
    /// Returns the number of entries rendered. Before `load` this does nothing,
    /// not even clearing. A query that fails to parse leaves `out` cleared.
    pub fn on_input<C: ResultsContainer + ?Sized>(&self, raw: &str, out: &mut C) -> usize {
        if !self.is_ready() {
            tracing::debug!("input before the index loaded; ignoring");
            return 0;
        }

        out.clear();
        match self.query(raw) {
            Ok(entries) => {
                for entry in &entries {
                    out.append(entry);
                }
                entries.len()
            }
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                0
            }
        }
    }
}

/// Renders entries as the markup the page expects.
///
/// ```text
/// <div class="result"><a href="URL">TITLE</a><div>SNIPPET</div></div>
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlContainer {
    html: String,
    count: usize,
    result_class: String,
    trusted_markup: bool,
}

impl HtmlContainer {
    pub fn new(config: &WidgetConfig) -> Self {
        HtmlContainer {
            html: String::new(),
            count: 0,
            result_class: config.result_class.clone(),
            trusted_markup: config.trusted_markup,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

impl ResultsContainer for HtmlContainer {
    fn clear(&mut self) {
        self.html.clear();
        self.count = 0;
    }

    fn append(&mut self, entry: &ResultEntry) {
        self.html
            .push_str(&render_entry(entry, &self.result_class, self.trusted_markup));
        self.count += 1;
    }
}

/// Markup for one entry. `trusted_markup` inserts the snippet text unescaped.
pub fn render_entry(entry: &ResultEntry, result_class: &str, trusted_markup: bool) -> String {
    let snippet = if trusted_markup {
        entry.snippet.text.clone()
    } else {
        entry.snippet.to_html()
    };
    format!(
        r#"<div class="{}"><a href="{}">{}</a><div>{}</div></div>"#,
        escape_html(result_class),
        escape_html(&entry.href),
        escape_html(&entry.title),
        snippet
    )
}
