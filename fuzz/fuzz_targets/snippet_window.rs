// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Arbitrary text, arbitrary query, arbitrary window. The extractor slices by
//! char, folds case per char and records a byte range for the highlight; any
//! of those going wrong shows up as a panic or a range that splits a char.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagesearch::snippet::extract;
use pagesearch::SnippetWindow;

#[derive(Arbitrary, Debug)]
struct Input {
    text: Option<String>,
    query: String,
    lead: u8,
    width: u16,
    fallback: u16,
    ellipsis: String,
}

fuzz_target!(|input: Input| {
    let window = SnippetWindow {
        lead: usize::from(input.lead),
        width: usize::from(input.width),
        fallback: usize::from(input.fallback),
        ellipsis: input.ellipsis.chars().take(4).collect(),
    };
    let marker = window.ellipsis.chars().count();

    let snippet = extract(input.text.as_deref(), &input.query, &window);

    let Some(text) = input.text.as_deref() else {
        assert!(snippet.is_empty());
        return;
    };

    // INVARIANT 1: the window is bounded
    let limit = window.width.max(window.fallback) + 2 * marker;
    assert!(snippet.text.chars().count() <= limit);

    // INVARIANT 2: the highlight is a non-empty slice on char boundaries
    if let Some(range) = snippet.highlight.clone() {
        assert!(range.start < range.end && range.end <= snippet.text.len());
        assert!(snippet.text.is_char_boundary(range.start));
        assert!(snippet.text.is_char_boundary(range.end));
    }

    // INVARIANT 3: without a highlight or marker prefix the snippet starts like the text
    if snippet.highlight.is_none() && input.query.is_empty() && !text.is_empty() {
        let first = text.chars().next();
        if window.width > 0 {
            assert_eq!(snippet.text.chars().next(), first);
        }
    }
});
