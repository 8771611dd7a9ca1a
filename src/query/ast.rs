//! Query abstract syntax tree.

use std::fmt;

/// A parsed query.
///
/// A closed sum over the five node kinds; evaluation pattern-matches on it
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// A single keyword.
    Term(String),
    /// A quoted phrase, stored verbatim.
    Phrase(String),
    /// Both operands, left-associative.
    And(Box<QueryNode>, Box<QueryNode>),
    /// Either operand, left-associative.
    Or(Box<QueryNode>, Box<QueryNode>),
    /// Negation of the child.
    Not(Box<QueryNode>),
}

impl QueryNode {
    /// Build an `And` node.
    pub fn and(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::And(Box::new(left), Box::new(right))
    }

    /// Build an `Or` node.
    pub fn or(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::Or(Box::new(left), Box::new(right))
    }

    /// Build a `Not` node.
    pub fn not(child: QueryNode) -> Self {
        QueryNode::Not(Box::new(child))
    }

    /// Collect the text of every `Term` and `Phrase` leaf, left to right.
    ///
    /// Operators recurse into all children without applying Boolean
    /// semantics; the evaluator re-analyzes the collected text into its term
    /// bag.
    pub fn collect_leaf_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            QueryNode::Term(term) => out.push(term),
            QueryNode::Phrase(phrase) => out.push(phrase),
            QueryNode::And(left, right) | QueryNode::Or(left, right) => {
                left.collect_leaf_text(out);
                right.collect_leaf_text(out);
            }
            QueryNode::Not(child) => child.collect_leaf_text(out),
        }
    }
}

impl fmt::Display for QueryNode {
    /// Prints a fully parenthesized form that re-parses to an equivalent
    /// tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryNode::Term(term) => write!(f, "{term}"),
            QueryNode::Phrase(phrase) => write!(f, "\"{phrase}\""),
            QueryNode::And(left, right) => write!(f, "({left} AND {right})"),
            QueryNode::Or(left, right) => write!(f, "({left} OR {right})"),
            QueryNode::Not(child) => write!(f, "(NOT {child})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_leaf_text_recurses_all_operators() {
        let node = QueryNode::or(
            QueryNode::and(
                QueryNode::Term("apple".into()),
                QueryNode::not(QueryNode::Phrase("ripe banana".into())),
            ),
            QueryNode::Term("cherry".into()),
        );
        let mut leaves = Vec::new();
        node.collect_leaf_text(&mut leaves);
        assert_eq!(leaves, vec!["apple", "ripe banana", "cherry"]);
    }

    #[test]
    fn test_display_forms() {
        let node = QueryNode::or(
            QueryNode::and(
                QueryNode::Term("apple".into()),
                QueryNode::Term("banana".into()),
            ),
            QueryNode::not(QueryNode::Phrase("sour cherry".into())),
        );
        assert_eq!(
            node.to_string(),
            r#"((apple AND banana) OR (NOT "sour cherry"))"#
        );
    }
}
