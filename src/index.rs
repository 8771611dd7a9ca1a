//! In-memory inverted index with positional postings.
//!
//! - [`posting`]: posting lists and document identifiers
//! - [`inverted`]: the index itself plus per-document metadata
//! - [`writer`]: document ingest (reader → analyzer → index)

pub mod inverted;
pub mod posting;
pub mod writer;

pub use inverted::{DocumentMeta, InvertedIndex};
pub use posting::{DocId, Position, Posting};
pub use writer::IndexWriter;
