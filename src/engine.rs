//! High-level search engine facade.
//!
//! Ties the subsystems together behind a string-in, hits-out surface:
//! ingest through [`IndexWriter`], evaluation through [`Searcher`], hit
//! hydration through the [`DocumentReader`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::analysis::StandardAnalyzer;
use crate::error::Result;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::DocId;
use crate::index::writer::IndexWriter;
use crate::query::parser::QueryParser;
use crate::reader::{DocumentReader, FsDocumentReader};
use crate::search::searcher::Searcher;

/// Number of code points shown in a hit preview.
const PREVIEW_CODE_POINTS: usize = 150;

/// Preview text when the source document cannot be re-read.
const PREVIEW_UNAVAILABLE: &str = "(preview unavailable)";

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// The matching document.
    pub doc_id: DocId,
    /// Display title.
    pub title: String,
    /// Source path.
    pub path: PathBuf,
    /// BM25 score.
    pub score: f64,
    /// Leading text of the document, truncated with an ellipsis.
    pub preview: String,
}

/// The search engine: ingest documents, answer queries.
///
/// The inverted index sits behind a reader-writer lock: ingest takes the
/// write half, queries only ever read. Writes are expected quiescent while
/// queries run.
pub struct SearchEngine {
    index: Arc<RwLock<InvertedIndex>>,
    doc_reader: Arc<dyn DocumentReader>,
    writer: IndexWriter,
    searcher: Searcher,
    analyzer: StandardAnalyzer,
}

impl SearchEngine {
    /// Create an engine ingesting through `doc_reader`.
    pub fn new(doc_reader: Arc<dyn DocumentReader>) -> Result<Self> {
        let index = Arc::new(RwLock::new(InvertedIndex::new()));
        let writer = IndexWriter::new(doc_reader.clone(), index.clone())?;
        let searcher = Searcher::new(index.clone())?;
        Ok(SearchEngine {
            index,
            doc_reader,
            writer,
            searcher,
            analyzer: StandardAnalyzer::new()?,
        })
    }

    /// Create an engine reading plain-text files from the filesystem.
    pub fn with_fs_reader() -> Result<Self> {
        Self::new(Arc::new(FsDocumentReader::new()))
    }

    /// Index a single file, returning its document id.
    pub fn index_file(&self, path: &Path) -> Result<DocId> {
        self.writer.index_file(path)
    }

    /// Recursively index every supported file under `root`, skipping
    /// files that fail to read. Returns the number of documents indexed.
    pub fn index_directory(&self, root: &Path) -> Result<usize> {
        self.writer.index_directory(root)
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.index.read().document_count()
    }

    /// Evaluate `query` and return ranked hits.
    ///
    /// An empty, whitespace-only, or stopword-only query yields an empty
    /// list, not an error. Lexing and parsing failures are errors; scoring
    /// itself cannot fail.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        if self.analyzer.terms(query).is_empty() {
            tracing::debug!(query, "query analyzes to an empty term bag");
            return Ok(Vec::new());
        }
        let ast = QueryParser::parse(query)?;
        let ranked = self.searcher.search(&ast);
        tracing::debug!(query, hits = ranked.len(), "query evaluated");
        Ok(self.hydrate(ranked))
    }

    /// Rank the entire corpus against `query` text.
    ///
    /// Advisory fallback when [`search`](Self::search) returns nothing:
    /// every indexed document appears, zero-score ties included.
    pub fn suggestions(&self, query: &str) -> Vec<SearchHit> {
        self.hydrate(self.searcher.ranked_suggestions(query))
    }

    /// Resolve `(doc_id, score)` pairs into presentable hits.
    fn hydrate(&self, ranked: Vec<(DocId, f64)>) -> Vec<SearchHit> {
        let index = self.index.read();
        ranked
            .into_iter()
            .filter_map(|(doc_id, score)| {
                let meta = index.doc_meta(doc_id)?;
                let preview = match self.doc_reader.read(&meta.path) {
                    Ok(text) => preview_of(&text),
                    Err(e) => {
                        tracing::warn!(doc_id, error = %e, "preview unavailable");
                        PREVIEW_UNAVAILABLE.to_string()
                    }
                };
                Some(SearchHit {
                    doc_id,
                    title: meta.title.clone(),
                    path: meta.path.clone(),
                    score,
                    preview,
                })
            })
            .collect()
    }
}

/// First [`PREVIEW_CODE_POINTS`] code points of `text`, with an ellipsis
/// when truncated.
fn preview_of(text: &str) -> String {
    let mut chars = text.chars();
    let mut preview: String = chars.by_ref().take(PREVIEW_CODE_POINTS).collect();
    if chars.next().is_some() {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_shorter_than_limit_is_verbatim() {
        assert_eq!(preview_of("short text"), "short text");
    }

    #[test]
    fn test_preview_truncates_at_code_points() {
        let text = "x".repeat(200);
        let preview = preview_of(&text);
        assert_eq!(preview.chars().count(), PREVIEW_CODE_POINTS + 1);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn test_preview_exact_limit_has_no_ellipsis() {
        let text = "y".repeat(PREVIEW_CODE_POINTS);
        assert_eq!(preview_of(&text), text);
    }
}
