//! Recursive-descent query parser.
//!
//! Grammar, lowest precedence first; `AND` and `OR` are left-associative:
//!
//! ```text
//! or      := and ( "OR" and )*
//! and     := not ( "AND" not )*
//! not     := "NOT" primary | primary
//! primary := keyword | phrase | "(" or ")"
//! ```

use crate::query::QueryError;
use crate::query::ast::QueryNode;
use crate::query::lexer::{QueryLexer, Token, TokenKind};

/// Parses a token stream into a [`QueryNode`].
pub struct QueryParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl QueryParser {
    /// Parse `input` into an AST.
    ///
    /// The whole input must form one query; trailing tokens are an error.
    pub fn parse(input: &str) -> Result<QueryNode, QueryError> {
        let tokens = QueryLexer::new().tokenize(input)?;
        let mut parser = QueryParser { tokens, pos: 0 };
        let node = parser.parse_or()?;
        let next = parser.peek();
        if next.kind != TokenKind::Eof {
            return Err(QueryError::TrailingTokens {
                offset: next.offset,
            });
        }
        Ok(node)
    }

    fn peek(&self) -> &Token {
        // The token list always ends in Eof, so pos never runs past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn parse_or(&mut self) -> Result<QueryNode, QueryError> {
        let mut node = self.parse_and()?;
        while self.peek().kind == TokenKind::Or {
            self.advance();
            let right = self.parse_and()?;
            node = QueryNode::or(node, right);
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<QueryNode, QueryError> {
        let mut node = self.parse_not()?;
        while self.peek().kind == TokenKind::And {
            self.advance();
            let right = self.parse_not()?;
            node = QueryNode::and(node, right);
        }
        Ok(node)
    }

    fn parse_not(&mut self) -> Result<QueryNode, QueryError> {
        if self.peek().kind == TokenKind::Not {
            self.advance();
            let child = self.parse_primary()?;
            return Ok(QueryNode::not(child));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<QueryNode, QueryError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Keyword => Ok(QueryNode::Term(token.value)),
            TokenKind::Phrase => Ok(QueryNode::Phrase(token.value)),
            TokenKind::LeftParen => {
                let node = self.parse_or()?;
                let closing = self.advance();
                if closing.kind != TokenKind::RightParen {
                    return Err(QueryError::UnexpectedToken {
                        offset: closing.offset,
                        expected: "')'".to_string(),
                        found: describe(&closing),
                    });
                }
                Ok(node)
            }
            _ => Err(QueryError::UnexpectedToken {
                offset: token.offset,
                expected: "keyword, phrase, or '('".to_string(),
                found: describe(&token),
            }),
        }
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Keyword => format!("keyword \"{}\"", token.value),
        TokenKind::Phrase => format!("phrase \"{}\"", token.value),
        _ => token.kind.describe().to_string(),
    }
}
