//! Standard analyzer: lowercase, token extraction, length and stopword filters.

use ahash::AHashSet;
use regex::Regex;

use crate::analysis::stopwords::STOP_WORDS;
use crate::analysis::token::Token;
use crate::error::{CallunaError, Result};

/// Maximal runs of letters, digits, apostrophes, and hyphens over lowercased
/// input. Punctuation-adjacent forms (`dog.`, `(fox)`) normalize to the bare
/// term.
const TOKEN_PATTERN: &str = r"[a-z0-9'-]+";

/// The default text analyzer.
///
/// Deterministic and pure: the same input always yields the same token
/// stream. Applied identically to document bodies and to query terms.
#[derive(Debug, Clone)]
pub struct StandardAnalyzer {
    pattern: Regex,
    stopwords: AHashSet<&'static str>,
}

impl StandardAnalyzer {
    /// Create a new analyzer.
    ///
    /// Fails only if the token pattern does not compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| CallunaError::analysis(format!("invalid token pattern: {e}")))?;
        Ok(StandardAnalyzer {
            pattern,
            stopwords: STOP_WORDS.iter().copied().collect(),
        })
    }

    /// Analyze `text` into a token stream.
    ///
    /// Tokens of length ≤ 1 and stopwords are dropped; surviving tokens are
    /// numbered 0, 1, 2, … in source order.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut position: u32 = 0;
        for found in self.pattern.find_iter(&lowered) {
            let term = found.as_str();
            if term.len() <= 1 {
                continue;
            }
            if self.stopwords.contains(term) {
                continue;
            }
            tokens.push(Token::new(term, position));
            position += 1;
        }
        tokens
    }

    /// Analyze `text` and return the terms only, discarding positions.
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).into_iter().map(|t| t.text).collect()
    }
}
