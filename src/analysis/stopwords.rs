//! The closed stopword list shared by the analyzer and the query lexer.

/// Common English words removed during analysis.
pub const STOP_WORDS: [&str; 42] = [
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "of", "in", "on", "at", "by",
    "for", "with", "to", "from", "is", "are", "was", "were", "be", "been", "being", "as", "that",
    "this", "these", "those", "he", "she", "it", "they", "we", "you", "i", "me", "my", "your",
    "our", "their",
];

/// Whether `word` (already lowercased) is a stopword.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("their"));
        assert!(!is_stop_word("not"));
        assert!(!is_stop_word("fox"));
    }

    #[test]
    fn test_match_is_exact() {
        // Callers lowercase before asking.
        assert!(!is_stop_word("The"));
    }
}
