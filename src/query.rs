//! The query language: lexer, parser, and AST.
//!
//! Queries combine keywords, quoted phrases, and the Boolean operators
//! `AND`, `OR`, `NOT` (case-insensitive; `+` and `-` are shorthand for `AND`
//! and `NOT`), with parentheses for grouping. `AND` binds tighter than `OR`;
//! `NOT` binds tighter than both.

use thiserror::Error;

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::QueryNode;
pub use lexer::{QueryLexer, Token, TokenKind};
pub use parser::QueryParser;

/// Errors produced while lexing or parsing a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A quoted phrase was opened but never closed.
    #[error("unterminated phrase starting at offset {offset}")]
    UnterminatedPhrase {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// The parser met a token it cannot use here.
    #[error("unexpected token at offset {offset}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Byte offset of the offending token.
        offset: usize,
        /// What the parser was looking for.
        expected: String,
        /// What it found instead.
        found: String,
    },

    /// Input continued after a complete query.
    #[error("unexpected trailing tokens at offset {offset}")]
    TrailingTokens {
        /// Byte offset where the trailing input begins.
        offset: usize,
    },
}
