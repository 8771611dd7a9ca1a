//! The inverted index: term → positional postings, plus document statistics.

use std::path::PathBuf;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::posting::{DocId, Position, Posting};

/// Metadata recorded for every indexed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// The document's identifier.
    pub doc_id: DocId,
    /// Source path the document was read from.
    pub path: PathBuf,
    /// Display title (the file name of `path`).
    pub title: String,
    /// Emitted token count; equals the sum of term frequencies for the doc.
    pub length: u32,
}

/// In-memory inverted index with positional postings.
///
/// The index exclusively owns all posting lists, document lengths, and
/// metadata. Entries are created at ingest and never mutated or deleted once
/// a document finishes indexing. All reads are total: absent terms or
/// documents yield empty slices, zero, or `None`.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, Vec<Posting>>,
    doc_lengths: AHashMap<DocId, u32>,
    doc_metas: AHashMap<DocId, DocumentMeta>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `term` at `position` in `doc_id`.
    ///
    /// Appends to the last posting of the term when it belongs to the same
    /// document, otherwise starts a new posting. Positions for a given
    /// `(term, doc_id)` must arrive in strictly increasing order; the writer
    /// guarantees this by feeding tokens in source order.
    pub fn add_term(&mut self, term: &str, doc_id: DocId, position: Position) {
        let list = self.postings.entry(term.to_string()).or_default();
        match list.last_mut() {
            Some(last) if last.doc_id == doc_id => {
                debug_assert!(
                    last.positions.last().is_none_or(|&p| p < position),
                    "positions for a (term, doc) pair must be strictly increasing"
                );
                last.positions.push(position);
            }
            _ => list.push(Posting::new(doc_id, position)),
        }
    }

    /// Record the emitted token count of `doc_id`.
    pub fn set_doc_length(&mut self, doc_id: DocId, length: u32) {
        self.doc_lengths.insert(doc_id, length);
    }

    /// Emitted token count of `doc_id`, or 0 when unknown.
    pub fn doc_length(&self, doc_id: DocId) -> u32 {
        self.doc_lengths.get(&doc_id).copied().unwrap_or(0)
    }

    /// Record metadata for a document.
    pub fn add_doc_meta(&mut self, meta: DocumentMeta) {
        self.doc_metas.insert(meta.doc_id, meta);
    }

    /// Metadata for `doc_id`, if indexed.
    pub fn doc_meta(&self, doc_id: DocId) -> Option<&DocumentMeta> {
        self.doc_metas.get(&doc_id)
    }

    /// The posting list for `term`, empty when the term is unknown.
    ///
    /// Lookup is case-insensitive; stored terms are canonically lowercase.
    pub fn postings(&self, term: &str) -> &[Posting] {
        if let Some(list) = self.postings.get(term) {
            return list;
        }
        let lowered = term.to_lowercase();
        self.postings
            .get(lowered.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of documents containing `term`.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings(term).len()
    }

    /// Every indexed document id, ascending.
    pub fn all_doc_ids(&self) -> Vec<DocId> {
        let mut ids: Vec<DocId> = self.doc_lengths.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Mean emitted token count over all documents, 0.0 for an empty corpus.
    pub fn avg_doc_length(&self) -> f64 {
        if self.doc_lengths.is_empty() {
            return 0.0;
        }
        let total: u64 = self.doc_lengths.values().map(|&len| u64::from(len)).sum();
        total as f64 / self.doc_lengths.len() as f64
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterate the distinct indexed terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }
}
