//! Text analysis for documents and query terms.
//!
//! The analysis pipeline turns raw text into the normalized term stream that
//! the index and the query evaluator share:
//!
//! ```text
//! Text → lowercase → token extraction → length filter → stopword filter
//! ```
//!
//! The same pipeline is applied to indexed documents and to query text, so
//! the query vocabulary always matches the index vocabulary.

pub mod analyzer;
pub mod stopwords;
pub mod token;

pub use analyzer::StandardAnalyzer;
pub use token::Token;
