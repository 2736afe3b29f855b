// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction and query execution over tantivy.
//!
//! Everything lives in one in-memory segment, written with
//! `SingleSegmentIndexWriter` so no indexing threads are spawned and the same
//! code runs in the browser.
//!
//! # Invariants
//!
//! 1. **REF_STORED**: every indexed document stores its ref in `_ref`, so each
//!    hit names a document that was added.
//! 2. **ORDER_STABLE**: hits are sorted by score, then by insertion order.
//! 3. **FIELDS_UNIQUE**: a field name is registered at most once; re-registering
//!    only updates its boost.

use super::{FullTextIndex, Indexable};
use crate::error::{Error, Result};
use crate::types::SearchResult;
use std::collections::HashMap;
use std::fmt;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, Value, STORED};
use tantivy::tokenizer::{AsciiFoldingFilter, LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer};
use tantivy::{Index, IndexReader, ReloadPolicy, SingleSegmentIndexWriter, TantivyDocument, TantivyError};

/// Name the analyzer is registered under.
const TOKENIZER_NAME: &str = "pagesearch";

/// Stored-only field carrying each document's ref.
const REF_FIELD: &str = "_ref";

/// Indexing memory budget. The writer flushes one segment at the end, so this
/// only caps how large a site can get.
const WRITER_MEMORY_BYTES: usize = 15_000_000;

/// Tokens longer than this are dropped (base64 blobs, minified code).
const MAX_TOKEN_LEN: usize = 40;

/// A searchable field and its boost.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub boost: f32,
}

#[derive(Debug, Clone)]
struct Row {
    doc_ref: String,
    values: Vec<Option<String>>,
}

/// Collects documents, then writes them into an [`InvertedIndex`].
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    ref_field: String,
    fields: Vec<FieldSpec>,
    rows: Vec<Row>,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    pub fn new() -> Self {
        IndexBuilder {
            ref_field: "id".to_string(),
            fields: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// The field whose value identifies a document in results.
    pub fn ref_field(mut self, name: &str) -> Self {
        self.ref_field = name.to_string();
        self
    }

    /// Register a searchable field with boost 1.
    pub fn field(self, name: &str) -> Self {
        self.field_with_boost(name, 1.0)
    }

    /// Register a searchable field. Re-registering a name updates its boost.
    ///
    /// Fields must be registered before the first `add`.
    pub fn field_with_boost(mut self, name: &str, boost: f32) -> Self {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.boost = boost,
            None => self.fields.push(FieldSpec {
                name: name.to_string(),
                boost,
            }),
        }
        self
    }

    /// Add a document. Documents without a ref value are skipped.
    ///
    /// Returns whether the document was kept.
    pub fn add<D: Indexable + ?Sized>(&mut self, doc: &D) -> bool {
        let Some(doc_ref) = doc.field(&self.ref_field) else {
            tracing::warn!(ref_field = %self.ref_field, "skipping document without a ref");
            return false;
        };
        let values = self
            .fields
            .iter()
            .map(|spec| doc.field(&spec.name).map(str::to_string))
            .collect();
        self.rows.push(Row {
            doc_ref: doc_ref.to_string(),
            values,
        });
        true
    }

    /// Write every added document into a fresh in-memory index.
    pub fn build(self) -> Result<InvertedIndex> {
        let mut schema_builder = Schema::builder();
        let ref_field = schema_builder.add_text_field(REF_FIELD, STORED);

        let text_options = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(TOKENIZER_NAME)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let mut fields = Vec::with_capacity(self.fields.len());
        for (column, spec) in self.fields.into_iter().enumerate() {
            if !is_valid_field_name(&spec.name) {
                tracing::warn!(field = %spec.name, "skipping field with an unusable name");
                continue;
            }
            let field = schema_builder.add_text_field(&spec.name, text_options.clone());
            fields.push(IndexedField { spec, field, column });
        }

        let index = Index::create_in_ram(schema_builder.build());
        index.tokenizers().register(TOKENIZER_NAME, analyzer());

        // An index with no segments is valid and simply matches nothing
        let index = if self.rows.is_empty() {
            index
        } else {
            let mut writer: SingleSegmentIndexWriter = SingleSegmentIndexWriter::new(index, WRITER_MEMORY_BYTES)?;
            for row in &self.rows {
                let mut doc = TantivyDocument::new();
                doc.add_text(ref_field, &row.doc_ref);
                for indexed in &fields {
                    if let Some(Some(value)) = row.values.get(indexed.column) {
                        doc.add_text(indexed.field, value);
                    }
                }
                writer.add_document(doc)?;
            }
            writer.finalize()?
        };

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        let mut parser = QueryParser::for_index(&index, fields.iter().map(|f| f.field).collect());
        for indexed in &fields {
            parser.set_field_boost(indexed.field, indexed.spec.boost);
        }

        tracing::debug!(
            docs = self.rows.len(),
            fields = fields.len(),
            "built full-text index"
        );

        Ok(InvertedIndex {
            ref_field_name: self.ref_field,
            ref_field,
            fields,
            doc_count: self.rows.len(),
            reader,
            parser,
        })
    }
}

/// Letters, digits, `_` and `-`, not starting with `-`, and not the ref slot.
fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty()
        && name != REF_FIELD
        && !name.starts_with('-')
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Unicode word split, drop very long tokens, lowercase, fold to ASCII.
///
/// Queries go through the same analyzer, so `ogretmen` finds "Öğretmen".
fn analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LEN))
        .filter(LowerCaser)
        .filter(AsciiFoldingFilter)
        .build()
}

#[derive(Debug, Clone)]
struct IndexedField {
    spec: FieldSpec,
    field: Field,
    column: usize,
}

/// A built, read-only tantivy index with its query parser.
pub struct InvertedIndex {
    ref_field_name: String,
    ref_field: Field,
    fields: Vec<IndexedField>,
    doc_count: usize,
    reader: IndexReader,
    parser: QueryParser,
}

impl fmt::Debug for InvertedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvertedIndex")
            .field("ref_field", &self.ref_field_name)
            .field("fields", &self.field_names())
            .field("docs", &self.doc_count)
            .finish_non_exhaustive()
    }
}

/// Summary numbers for `inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats {
    pub ref_field: String,
    pub docs: usize,
    pub segments: usize,
    pub fields: Vec<FieldStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStats {
    pub name: String,
    pub boost: f32,
    /// Mean tokens per document.
    pub avg_len: f64,
    /// Distinct terms in the field's dictionary.
    pub terms: usize,
    /// Most widespread terms as `(term, doc_freq)`, highest first.
    pub top_terms: Vec<(String, u32)>,
}

impl IndexStats {
    /// Distinct terms summed over fields.
    pub fn terms(&self) -> usize {
        self.fields.iter().map(|f| f.terms).sum()
    }
}

impl InvertedIndex {
    pub fn len(&self) -> usize {
        self.doc_count
    }

    pub fn is_empty(&self) -> bool {
        self.doc_count == 0
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.spec.name.as_str()).collect()
    }

    /// Walk each field's term dictionary.
    pub fn stats(&self, top_n: usize) -> Result<IndexStats> {
        let searcher = self.reader.searcher();
        let docs = searcher.num_docs() as usize;

        let mut fields = Vec::with_capacity(self.fields.len());
        for indexed in &self.fields {
            let mut doc_freqs: HashMap<String, u32> = HashMap::new();
            let mut tokens = 0u64;
            for segment in searcher.segment_readers() {
                let inverted = segment.inverted_index(indexed.field)?;
                tokens += inverted.total_num_tokens();
                let mut stream = inverted.terms().stream().map_err(TantivyError::from)?;
                while stream.advance() {
                    let term = String::from_utf8_lossy(stream.key()).into_owned();
                    *doc_freqs.entry(term).or_default() += stream.value().doc_freq;
                }
            }

            let terms = doc_freqs.len();
            let mut top_terms: Vec<(String, u32)> = doc_freqs.into_iter().collect();
            top_terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            top_terms.truncate(top_n);

            fields.push(FieldStats {
                name: indexed.spec.name.clone(),
                boost: indexed.spec.boost,
                avg_len: if docs == 0 { 0.0 } else { tokens as f64 / docs as f64 },
                terms,
                top_terms,
            });
        }

        Ok(IndexStats {
            ref_field: self.ref_field_name.clone(),
            docs,
            segments: searcher.segment_readers().len(),
            fields,
        })
    }
}

impl FullTextIndex for InvertedIndex {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let parsed = self
            .parser
            .parse_query(query)
            .map_err(|err| Error::query_parse(query, err.to_string()))?;

        let searcher = self.reader.searcher();
        let mut hits = searcher.search(parsed.as_ref(), &TopDocs::with_limit(self.doc_count.max(1)))?;
        hits.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        let mut results = Vec::with_capacity(hits.len());
        for (score, address) in hits {
            let stored: TantivyDocument = searcher.doc(address)?;
            let Some(doc_ref) = stored.get_first(self.ref_field).and_then(|v| v.as_str()) else {
                tracing::warn!(?address, "hit without a stored ref; skipping");
                continue;
            };
            results.push(SearchResult {
                doc_ref: doc_ref.to_string(),
                score: f64::from(score),
            });
        }
        Ok(results)
    }
}
