//! Input events end to end: load, type, look at the container.

use crate::common::{fixture_widget, fox_doc, loaded_widget, make_docs_containing, render, titles};
use pagesearch::{Document, HtmlContainer, ResultEntry, ResultsContainer, SearchWidget, WidgetConfig};

/// Records container calls in order.
#[derive(Default)]
struct Spy {
    calls: Vec<String>,
}

impl ResultsContainer for Spy {
    fn clear(&mut self) {
        self.calls.push("clear".to_string());
    }

    fn append(&mut self, entry: &ResultEntry) {
        self.calls.push(format!("append {}", entry.title));
    }
}

#[test]
fn test_fox_renders_intro_with_snippet() {
    let widget = loaded_widget(vec![fox_doc()]);
    let mut out: Vec<ResultEntry> = Vec::new();

    assert_eq!(widget.on_input("fox", &mut out), 1);
    assert_eq!(out[0].title, "Intro");
    assert_eq!(out[0].href, "/a");
    assert!(out[0].snippet.text.contains("quick brown fox jumps"));
    assert_eq!(out[0].snippet.matched(), Some("fox"));
}

#[test]
fn test_fox_markup() {
    let widget = loaded_widget(vec![fox_doc()]);
    assert_eq!(
        render(&widget, "fox"),
        r#"<div class="result"><a href="/a">Intro</a><div>The quick brown <mark>fox</mark> jumps over the lazy dog...</div></div>"#
    );
}

#[test]
fn test_empty_input_empties_container_whatever_was_there() {
    let widget = loaded_widget(vec![fox_doc()]);
    let mut out: Vec<ResultEntry> = Vec::new();
    widget.on_input("fox", &mut out);
    assert_eq!(out.len(), 1);

    for input in ["", "   ", "\t\n"] {
        widget.on_input("fox", &mut out);
        assert_eq!(widget.on_input(input, &mut out), 0);
        assert!(out.is_empty(), "{:?} left results behind", input);
    }
}

#[test]
fn test_clear_comes_first() {
    let widget = fixture_widget();
    let mut spy = Spy::default();

    widget.on_input("fox", &mut spy);
    widget.on_input("", &mut spy);
    widget.on_input("kurulum", &mut spy);

    assert_eq!(
        spy.calls,
        [
            "clear",
            "append Fox facts",
            "append Intro",
            "clear",
            "clear",
            "append Kurulum",
        ]
    );
}

#[test]
fn test_input_before_load_leaves_container_alone() {
    let widget: SearchWidget = SearchWidget::new(WidgetConfig::default());
    let mut spy = Spy::default();

    assert_eq!(widget.on_input("fox", &mut spy), 0);
    assert!(spy.calls.is_empty());
    assert!(!widget.is_ready());
}

#[test]
fn test_at_most_fifty_results() {
    let widget = loaded_widget(make_docs_containing(120, "kernel"));
    let mut out = HtmlContainer::new(widget.config());

    assert_eq!(widget.on_input("kernel", &mut out), 50);
    assert_eq!(out.len(), 50);
    assert_eq!(out.as_str().matches(r#"<div class="result">"#).count(), 50);
}

#[test]
fn test_configured_cap() {
    let config = WidgetConfig {
        max_results: 3,
        ..WidgetConfig::default()
    };
    let widget = SearchWidget::from_documents(config, make_docs_containing(10, "kernel")).unwrap();
    assert_eq!(widget.query("kernel").unwrap().len(), 3);
}

#[test]
fn test_cap_keeps_index_order() {
    let widget = loaded_widget(make_docs_containing(60, "kernel"));
    let all: Vec<String> = make_docs_containing(60, "kernel")
        .into_iter()
        .map(|d| d.title)
        .take(50)
        .collect();

    // Identical term statistics, so ties fall back to insertion order
    assert_eq!(titles(&widget, "kernel"), all);
}

#[test]
fn test_title_matches_rank_first() {
    let widget = fixture_widget();
    assert_eq!(titles(&widget, "fox"), ["Fox facts", "Intro"]);
}

#[test]
fn test_numeric_id_resolves() {
    let widget = fixture_widget();
    assert_eq!(titles(&widget, "antarctica"), ["Fox facts"]);
    assert_eq!(widget.document("42").map(|d| d.url.as_str()), Some("/blog/fox-facts.html"));
}

#[test]
fn test_late_match_gets_leading_ellipsis() {
    let widget = fixture_widget();
    let entries = widget.query("geri kalanını").unwrap();

    assert_eq!(entries.len(), 1);
    let snippet = &entries[0].snippet;
    assert!(snippet.text.starts_with("... çoğu site için"));
    assert!(snippet.text.ends_with("kesilebili..."));
    assert_eq!(snippet.matched(), Some("geri kalanını"));
    assert_eq!(snippet.text.chars().count(), 3 + 260 + 3);
}

#[test]
fn test_match_within_lead_has_no_leading_ellipsis() {
    let widget = fixture_widget();
    let entries = widget.query("arama").unwrap();

    let yapilandirma = entries.iter().find(|e| e.title == "Yapılandırma").unwrap();
    // "Arama" sits at char 50
    assert!(yapilandirma.snippet.text.starts_with("Yapılandırma dosyası"));
    assert_eq!(yapilandirma.snippet.matched(), Some("Arama"));
}

#[test]
fn test_folded_match_falls_back_to_head_of_text() {
    let widget = fixture_widget();
    let entries = widget.query("guncelleyin").unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Kurulum");
    // The index folds ü, the literal snippet search does not
    assert!(entries[0].snippet.text.starts_with("Paketi kurmak"));
    assert!(entries[0].snippet.text.ends_with("kontrol edin...."));
    assert_eq!(entries[0].snippet.highlight, None);
}

#[test]
fn test_document_without_text() {
    let widget = fixture_widget();
    assert_eq!(
        render(&widget, "tags"),
        r#"<div class="result"><a href="/tags/index.html">All tags</a><div></div></div>"#
    );
}

#[test]
fn test_untrusted_text_is_escaped() {
    let widget = fixture_widget();
    let html = render(&widget, "bold");

    assert!(html.contains("Escaping &lt;script&gt; &amp; friends"));
    assert!(html.contains("Write &lt;b&gt;<mark>bold</mark>&lt;/b&gt; with care &amp; escape &quot;quotes&quot; and &#39;apostrophes&#39;."));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_trusted_markup_keeps_snippet_raw() {
    let config = WidgetConfig {
        trusted_markup: true,
        ..WidgetConfig::default()
    };
    let widget = SearchWidget::from_documents(config, crate::common::fixture_docs()).unwrap();
    let html = render(&widget, "bold");

    assert!(html.contains("<div>Write <b>bold</b> with care"));
    // Title and href stay escaped either way
    assert!(html.contains("Escaping &lt;script&gt; &amp; friends"));
}

#[test]
fn test_duplicate_ids_render_first_document() {
    let widget = loaded_widget(vec![
        fox_doc(),
        Document::new("1", "/duplicate", "Duplicate intro").with_text("lazy lazy lazy"),
    ]);

    let entries = widget.query("lazy").unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.title == "Intro" && e.href == "/a"));
}

#[test]
fn test_bad_field_clears_and_renders_nothing() {
    let widget = fixture_widget();
    let mut out: Vec<ResultEntry> = Vec::new();
    widget.on_input("fox", &mut out);

    assert_eq!(widget.on_input("ttile:fox", &mut out), 0);
    assert!(out.is_empty());
    assert!(widget.query("ttile:fox").is_err());
}
