//! Query string scanner.

use crate::analysis::stopwords::is_stop_word;
use crate::query::QueryError;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A search keyword.
    Keyword,
    /// A quoted phrase.
    Phrase,
    /// The `AND` operator (or `+`).
    And,
    /// The `OR` operator.
    Or,
    /// The `NOT` operator (or `-`).
    Not,
    /// `(`.
    LeftParen,
    /// `)`.
    RightParen,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Phrase => "phrase",
            TokenKind::And => "'AND'",
            TokenKind::Or => "'OR'",
            TokenKind::Not => "'NOT'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A scanned token.
///
/// Keywords keep their original spelling (normalization happens during
/// evaluation, through the analyzer); phrases keep their inner text
/// verbatim. Operator and punctuation tokens carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The token's text, where applicable.
    pub value: String,
    /// Byte offset of the token in the query string.
    pub offset: usize,
}

impl Token {
    fn new(kind: TokenKind, value: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            offset,
        }
    }
}

/// Scans a query string into a token list ending in exactly one `Eof`.
///
/// Keyword tokens whose lowercased value is a stopword are dropped, keeping
/// the query vocabulary aligned with the indexed vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryLexer;

impl QueryLexer {
    /// Create a new lexer.
    pub fn new() -> Self {
        QueryLexer
    }

    /// Tokenize `input`.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, QueryError> {
        let mut tokens = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some(&(offset, c)) = chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    chars.next();
                }
                '(' => {
                    tokens.push(Token::new(TokenKind::LeftParen, "", offset));
                    chars.next();
                }
                ')' => {
                    tokens.push(Token::new(TokenKind::RightParen, "", offset));
                    chars.next();
                }
                '"' => {
                    chars.next();
                    let mut value = String::new();
                    let mut closed = false;
                    for (_, ch) in chars.by_ref() {
                        if ch == '"' {
                            closed = true;
                            break;
                        }
                        value.push(ch);
                    }
                    if !closed {
                        return Err(QueryError::UnterminatedPhrase { offset });
                    }
                    tokens.push(Token::new(TokenKind::Phrase, value, offset));
                }
                // Shorthand operators, recognized only at the start of a
                // token; inside a word run ('covid-19') they are word
                // characters.
                '+' => {
                    tokens.push(Token::new(TokenKind::And, "", offset));
                    chars.next();
                }
                '-' => {
                    tokens.push(Token::new(TokenKind::Not, "", offset));
                    chars.next();
                }
                _ => {
                    let mut value = String::new();
                    while let Some(&(_, ch)) = chars.peek() {
                        if ch.is_whitespace() || matches!(ch, '(' | ')' | '"') {
                            break;
                        }
                        value.push(ch);
                        chars.next();
                    }
                    let lowered = value.to_lowercase();
                    match lowered.as_str() {
                        "and" => tokens.push(Token::new(TokenKind::And, "", offset)),
                        "or" => tokens.push(Token::new(TokenKind::Or, "", offset)),
                        "not" => tokens.push(Token::new(TokenKind::Not, "", offset)),
                        word if is_stop_word(word) => {}
                        _ => tokens.push(Token::new(TokenKind::Keyword, value, offset)),
                    }
                }
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", input.len()));
        Ok(tokens)
    }
}
