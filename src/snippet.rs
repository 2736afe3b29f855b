// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-window snippet extraction.
//!
//! Finds the raw query as a literal, case-insensitive substring of the
//! document text and cuts a window around it:
//!
//! ```text
//!              i-60              i                          i-60+260
//!   text:  ....[=================fox========================]......
//!   out:   "..." + window                                   + "..."
//! ```
//!
//! No word boundaries, no multi-word handling. If the query is not a
//! substring the first 200 characters are used instead.
//!
//! # Invariants
//!
//! - All offsets are char offsets, so a window never splits a code point.
//! - Leading ellipsis iff the window starts after the first char.
//! - Trailing ellipsis always (unless text is absent).
//! - `highlight` is a byte range into `Snippet::text` covering the part of the
//!   match that fell inside the window.

use crate::config::{DEFAULT_ELLIPSIS, SNIPPET_FALLBACK_CHARS, SNIPPET_LEAD_CHARS, SNIPPET_WIDTH_CHARS};
use crate::utils::{escape_html, fold_char};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Window geometry, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetWindow {
    /// Characters kept before the match.
    pub lead: usize,
    /// Total characters in the window.
    pub width: usize,
    /// Characters shown when the query is not found.
    pub fallback: usize,
    pub ellipsis: String,
}

impl Default for SnippetWindow {
    fn default() -> Self {
        Self {
            lead: SNIPPET_LEAD_CHARS,
            width: SNIPPET_WIDTH_CHARS,
            fallback: SNIPPET_FALLBACK_CHARS,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

/// An excerpt plus where the match sits inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Range<usize>>,
}

impl Snippet {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The highlighted slice, if the match landed in the window.
    pub fn matched(&self) -> Option<&str> {
        self.highlight.clone().and_then(|range| self.text.get(range))
    }

    /// Escaped markup with the match wrapped in `<mark>`.
    pub fn to_html(&self) -> String {
        match &self.highlight {
            Some(range) => format!(
                "{}<mark>{}</mark>{}",
                escape_html(&self.text[..range.start]),
                escape_html(&self.text[range.clone()]),
                escape_html(&self.text[range.end..]),
            ),
            None => escape_html(&self.text),
        }
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Plain-text snippet with the default window.
///
/// ```
/// use pagesearch::snippet::snippet;
///
/// let text = "The quick brown fox jumps over the lazy dog";
/// assert_eq!(snippet(Some(text), "FOX"), format!("{}...", text));
/// assert_eq!(snippet(None, "fox"), "");
/// ```
pub fn snippet(text: Option<&str>, query: &str) -> String {
    extract(text, query, &SnippetWindow::default()).text
}

/// Cut a snippet out of `text` around the first match of `query`.
pub fn extract(text: Option<&str>, query: &str, window: &SnippetWindow) -> Snippet {
    let Some(text) = text else {
        return Snippet::default();
    };

    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().map(fold_char).collect();

    let Some(hit) = find_folded(&chars, &needle) else {
        let mut out: String = chars.iter().take(window.fallback).collect();
        out.push_str(&window.ellipsis);
        return Snippet {
            text: out,
            highlight: None,
        };
    };

    let start = hit.saturating_sub(window.lead);
    let end = start.saturating_add(window.width).min(chars.len());
    let match_end = (hit + needle.len()).min(end);

    let mut out = String::new();
    if start > 0 {
        out.push_str(&window.ellipsis);
    }

    let mut mark_start = None;
    let mut mark_end = None;
    for (pos, c) in chars[start..end].iter().enumerate().map(|(k, c)| (start + k, c)) {
        if pos == hit {
            mark_start = Some(out.len());
        }
        if pos == match_end {
            mark_end = Some(out.len());
        }
        out.push(*c);
    }
    if match_end == end {
        mark_end = Some(out.len());
    }

    let highlight = match (mark_start, mark_end) {
        (Some(s), Some(e)) if s < e => Some(s..e),
        _ => None,
    };

    out.push_str(&window.ellipsis);
    Snippet {
        text: out,
        highlight,
    }
}

/// Char offset of the first case-insensitive occurrence of `needle`.
///
/// `needle` must already be folded. An empty needle matches at 0.
fn find_folded(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    let folded: Vec<char> = haystack.iter().map(|c| fold_char(*c)).collect();
    folded.windows(needle.len()).position(|w| w == needle)
}
