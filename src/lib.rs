//! # Calluna
//!
//! A small-corpus lexical search engine.
//!
//! ## Features
//!
//! - In-memory inverted index with positional postings
//! - Boolean and phrase query language with a recursive-descent parser
//! - Okapi BM25 ranking with deterministic ordering
//! - Pluggable document reading behind a narrow trait
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use calluna::SearchEngine;
//!
//! fn main() -> calluna::Result<()> {
//!     let engine = SearchEngine::with_fs_reader()?;
//!     engine.index_directory(Path::new("./corpus"))?;
//!
//!     for hit in engine.search("(quick AND fox) OR \"lazy dog\"")? {
//!         println!("{:.4}  {}", hit.score, hit.title);
//!     }
//!     Ok(())
//! }
//! ```

// Core modules
pub mod analysis;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod reader;
pub mod search;

// Re-exports for the public API
pub use analysis::{StandardAnalyzer, Token};
pub use engine::{SearchEngine, SearchHit};
pub use error::{CallunaError, Result};
pub use index::{DocId, DocumentMeta, IndexWriter, InvertedIndex, Position, Posting};
pub use query::{QueryError, QueryNode, QueryParser};
pub use reader::{DocumentReader, FsDocumentReader, ReaderError, SUPPORTED_EXTENSIONS};
pub use search::{Bm25Params, Bm25Scorer, SearchParams, Searcher};

// Re-export so callers share the same lock types.
pub use parking_lot;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
