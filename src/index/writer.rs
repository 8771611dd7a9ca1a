//! Document ingest: reader → analyzer → inverted index.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use walkdir::WalkDir;

use crate::analysis::StandardAnalyzer;
use crate::error::Result;
use crate::index::inverted::{DocumentMeta, InvertedIndex};
use crate::index::posting::DocId;
use crate::reader::{self, DocumentReader};

/// Ingests documents into an [`InvertedIndex`].
///
/// The writer is the index's single mutator: it reads raw text through the
/// [`DocumentReader`], analyzes it, and appends postings under the write
/// lock. Document ids come from a private atomic counter starting at 1 and
/// are never reused.
pub struct IndexWriter {
    doc_reader: Arc<dyn DocumentReader>,
    analyzer: StandardAnalyzer,
    index: Arc<RwLock<InvertedIndex>>,
    next_doc_id: AtomicU64,
}

impl IndexWriter {
    /// Create a writer over `index` ingesting through `doc_reader`.
    pub fn new(
        doc_reader: Arc<dyn DocumentReader>,
        index: Arc<RwLock<InvertedIndex>>,
    ) -> Result<Self> {
        Ok(IndexWriter {
            doc_reader,
            analyzer: StandardAnalyzer::new()?,
            index,
            next_doc_id: AtomicU64::new(1),
        })
    }

    /// Index a single file, returning its assigned document id.
    ///
    /// Reader failures propagate; a document is either fully indexed or not
    /// indexed at all.
    pub fn index_file(&self, path: &Path) -> Result<DocId> {
        let text = self.doc_reader.read(path)?;
        let tokens = self.analyzer.analyze(&text);
        let doc_id = self.next_doc_id.fetch_add(1, Ordering::SeqCst);

        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut index = self.index.write();
        for token in &tokens {
            index.add_term(&token.text, doc_id, token.position);
        }
        index.set_doc_length(doc_id, tokens.len() as u32);
        index.add_doc_meta(DocumentMeta {
            doc_id,
            path: path.to_path_buf(),
            title,
            length: tokens.len() as u32,
        });
        drop(index);

        tracing::debug!(doc_id, path = %path.display(), tokens = tokens.len(), "indexed document");
        Ok(doc_id)
    }

    /// Recursively index every supported file under `root`.
    ///
    /// A failure on a single file is logged and skipped; the walk continues.
    /// Returns the number of documents indexed.
    pub fn index_directory(&self, root: &Path) -> Result<usize> {
        let mut indexed = 0;
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !reader::is_supported(path) {
                continue;
            }
            match self.index_file(path) {
                Ok(_) => indexed += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping file");
                }
            }
        }
        tracing::debug!(root = %root.display(), indexed, "directory ingest finished");
        Ok(indexed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::path::PathBuf;

    use crate::reader::ReaderError;

    /// In-memory reader keyed by path.
    struct MapReader(HashMap<PathBuf, String>);

    impl DocumentReader for MapReader {
        fn read(&self, path: &Path) -> std::result::Result<String, ReaderError> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| ReaderError::NotFound {
                    path: path.to_path_buf(),
                })
        }
    }

    fn writer_with(docs: &[(&str, &str)]) -> (IndexWriter, Arc<RwLock<InvertedIndex>>) {
        let map: HashMap<PathBuf, String> = docs
            .iter()
            .map(|(path, text)| (PathBuf::from(path), text.to_string()))
            .collect();
        let index = Arc::new(RwLock::new(InvertedIndex::new()));
        let writer = IndexWriter::new(Arc::new(MapReader(map)), index.clone()).unwrap();
        (writer, index)
    }

    #[test]
    fn test_doc_ids_start_at_one_and_increase() {
        let (writer, _) = writer_with(&[("a.txt", "alpha beta"), ("b.txt", "gamma delta")]);
        assert_eq!(writer.index_file(Path::new("a.txt")).unwrap(), 1);
        assert_eq!(writer.index_file(Path::new("b.txt")).unwrap(), 2);
    }

    #[test]
    fn test_index_file_records_postings_length_and_meta() {
        let (writer, index) = writer_with(&[("a.txt", "The quick brown fox jumps")]);
        let doc_id = writer.index_file(Path::new("a.txt")).unwrap();

        let index = index.read();
        // "the" is a stopword, so 4 tokens survive.
        assert_eq!(index.doc_length(doc_id), 4);
        let meta = index.doc_meta(doc_id).unwrap();
        assert_eq!(meta.title, "a.txt");
        assert_eq!(meta.length, 4);
        assert_eq!(index.postings("quick")[0].positions, vec![0]);
        assert_eq!(index.postings("jumps")[0].positions, vec![3]);
    }

    #[test]
    fn test_reader_failure_propagates_and_indexes_nothing() {
        let (writer, index) = writer_with(&[]);
        assert!(writer.index_file(Path::new("missing.txt")).is_err());
        assert_eq!(index.read().document_count(), 0);
    }

    #[test]
    fn test_doc_length_equals_sum_of_term_freqs() {
        let (writer, index) = writer_with(&[("a.txt", "fox fox hound fox hound")]);
        let doc_id = writer.index_file(Path::new("a.txt")).unwrap();

        let index = index.read();
        let total: u32 = index
            .terms()
            .map(|term| {
                index
                    .postings(term)
                    .iter()
                    .filter(|p| p.doc_id == doc_id)
                    .map(|p| p.term_freq())
                    .sum::<u32>()
            })
            .sum();
        assert_eq!(total, index.doc_length(doc_id));
    }
}
