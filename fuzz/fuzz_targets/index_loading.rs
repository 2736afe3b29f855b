// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `search_index.json` bodies.
//!
//! A broken deploy can serve anything at the index URL. Parsing must fail
//! cleanly, and whatever does parse must load and answer a query.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pagesearch::{parse_documents, ResultEntry, SearchWidget, WidgetConfig};

fuzz_target!(|body: &[u8]| {
    let Ok(docs) = parse_documents(body) else {
        return;
    };
    let titles: Vec<String> = docs.iter().map(|d| d.title.clone()).collect();

    let Ok(widget) = SearchWidget::from_documents(WidgetConfig::default(), docs) else {
        return;
    };
    let mut out: Vec<ResultEntry> = Vec::new();
    let rendered = widget.on_input("a", &mut out);

    assert_eq!(rendered, out.len());
    assert!(out.len() <= WidgetConfig::default().max_results);
    for entry in &out {
        assert!(titles.contains(&entry.title));
    }
});
