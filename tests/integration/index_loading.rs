//! Loading `search_index.json` from disk and from strings.

use crate::common::{fixture_docs, loaded_widget, render, FIXTURE_INDEX};
use pagesearch::{parse_documents, read_documents, Error, IndexSource, SearchWidget, WidgetConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn write_index(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(body.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_fixture_loads() {
    let docs = fixture_docs();
    assert_eq!(docs.len(), 6);
    assert_eq!(docs[3].id, "42");
    assert_eq!(docs[4].text, None);
}

#[test]
fn test_read_from_temp_file() {
    let file = write_index(
        r#"[{"id": 7, "url": "/seven", "title": "Seven", "text": "lucky number", "tags": ["x"]}]"#,
    );
    let docs = read_documents(file.path()).unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "7");
    assert!(docs[0].extra.contains_key("tags"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search_index.json");

    match read_documents(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_json_error() {
    let file = write_index(r#"[{"id": "1", "title": "unterminated"#);
    assert!(matches!(read_documents(file.path()), Err(Error::Json(_))));
}

#[test]
fn test_failed_load_keeps_widget_unloaded() {
    let mut widget: SearchWidget = SearchWidget::new(WidgetConfig::default());
    if let Ok(docs) = parse_documents(b"<html>not found</html>") {
        widget.load(docs).unwrap();
    }

    assert!(!widget.is_ready());
    assert!(matches!(widget.query("fox"), Err(Error::NotReady)));
}

#[test]
fn test_reload_replaces_documents() {
    let mut widget = SearchWidget::from_documents(WidgetConfig::default(), fixture_docs()).unwrap();
    assert_eq!(widget.documents().len(), 6);

    widget
        .load(parse_documents(br#"[{"id": "only", "url": "/o", "title": "Only", "text": "fox"}]"#).unwrap())
        .unwrap();
    assert_eq!(widget.documents().len(), 1);
    let titles: Vec<String> = widget.query("fox").unwrap().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, ["Only"]);
}

#[test]
fn test_null_title_renders_empty_link_text() {
    let docs = parse_documents(br#"[{"id": "1", "url": "/a", "title": null, "text": "fox"}]"#).unwrap();
    let widget = loaded_widget(docs);
    assert_eq!(
        render(&widget, "fox"),
        r#"<div class="result"><a href="/a"></a><div><mark>fox</mark>...</div></div>"#
    );
}

#[test]
fn test_empty_index_loads_and_finds_nothing() {
    let widget = loaded_widget(parse_documents(b"[]").unwrap());
    assert!(widget.is_ready());
    assert!(widget.query("fox").unwrap().is_empty());
}

#[test]
fn test_source_parsing() {
    assert_eq!(
        FIXTURE_INDEX.parse::<IndexSource>().unwrap(),
        IndexSource::Path(PathBuf::from(FIXTURE_INDEX))
    );
    assert!(matches!(
        "https://docs.example.org/search_index.json".parse::<IndexSource>().unwrap(),
        IndexSource::Url(_)
    ));
    assert_eq!(
        IndexSource::Path(PathBuf::from("a/b.json")).to_string(),
        Path::new("a/b.json").display().to_string()
    );
}

#[cfg(feature = "fetch")]
#[test]
fn test_load_documents_from_path_source() {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let source: IndexSource = FIXTURE_INDEX.parse().unwrap();
    let docs = runtime.block_on(pagesearch::loader::load_documents(&source)).unwrap();
    assert_eq!(docs.len(), 6);
}
