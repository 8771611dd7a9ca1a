//! Query evaluation against the inverted index.

use std::sync::Arc;

use ahash::AHashSet;
use parking_lot::RwLock;

use crate::analysis::StandardAnalyzer;
use crate::error::Result;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::DocId;
use crate::query::ast::QueryNode;
use crate::search::scorer::{Bm25Params, Bm25Scorer};

/// Knobs for one search call.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Maximum number of results to return.
    pub limit: usize,
    /// Minimum score threshold.
    pub min_score: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            limit: usize::MAX,
            min_score: 0.0,
        }
    }
}

/// Evaluates parsed queries into ranked document lists.
///
/// Stateless beyond its injected dependencies; every call reads the index
/// under a read guard and never mutates it.
///
/// Evaluation is recall-oriented: Boolean operators shape which terms enter
/// the scoring bag, but candidates are the union of all documents matching
/// any bag term, and `AND`/`NOT` do not strictly filter.
pub struct Searcher {
    index: Arc<RwLock<InvertedIndex>>,
    analyzer: StandardAnalyzer,
    params: Bm25Params,
}

impl Searcher {
    /// Create a searcher over `index` with default BM25 parameters.
    pub fn new(index: Arc<RwLock<InvertedIndex>>) -> Result<Self> {
        Ok(Searcher {
            index,
            analyzer: StandardAnalyzer::new()?,
            params: Bm25Params::default(),
        })
    }

    /// Evaluate `query`, returning `(doc_id, score)` pairs ordered by score
    /// descending, then document id ascending.
    pub fn search(&self, query: &QueryNode) -> Vec<(DocId, f64)> {
        self.search_with_params(query, &SearchParams::default())
    }

    /// Evaluate `query` honoring `params`.
    pub fn search_with_params(
        &self,
        query: &QueryNode,
        params: &SearchParams,
    ) -> Vec<(DocId, f64)> {
        let bag = self.term_bag(query);
        if bag.is_empty() {
            return Vec::new();
        }

        let index = self.index.read();

        // Union candidate set over the distinct bag terms.
        let mut candidates: AHashSet<DocId> = AHashSet::new();
        let mut distinct: AHashSet<&str> = AHashSet::new();
        for term in &bag {
            if !distinct.insert(term.as_str()) {
                continue;
            }
            for posting in index.postings(term) {
                candidates.insert(posting.doc_id);
            }
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        let scorer = Bm25Scorer::with_params(&index, self.params);
        scorer
            .score_terms(&bag)
            .into_iter()
            .filter(|(doc_id, _)| candidates.contains(doc_id))
            .filter(|&(_, score)| score >= params.min_score)
            .take(params.limit)
            .collect()
    }

    /// Score the whole corpus against `query` text, zero ties permitted.
    ///
    /// Advisory fallback for when [`search`](Self::search) comes back empty;
    /// callers decide whether to surface it.
    pub fn ranked_suggestions(&self, query: &str) -> Vec<(DocId, f64)> {
        let bag = self.analyzer.terms(query);
        let index = self.index.read();
        Bm25Scorer::with_params(&index, self.params).score_all_docs(&bag)
    }

    /// Flatten the AST's leaf text and re-analyze it into the term bag.
    fn term_bag(&self, query: &QueryNode) -> Vec<String> {
        let mut leaves = Vec::new();
        query.collect_leaf_text(&mut leaves);
        leaves
            .iter()
            .flat_map(|text| self.analyzer.terms(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::query::parser::QueryParser;

    fn searcher_over(docs: &[(DocId, &str)]) -> Searcher {
        let mut index = InvertedIndex::new();
        let analyzer = StandardAnalyzer::new().unwrap();
        for &(doc_id, text) in docs {
            let tokens = analyzer.analyze(text);
            for token in &tokens {
                index.add_term(&token.text, doc_id, token.position);
            }
            index.set_doc_length(doc_id, tokens.len() as u32);
        }
        Searcher::new(Arc::new(RwLock::new(index))).unwrap()
    }

    fn two_doc_corpus() -> Searcher {
        searcher_over(&[
            (1, "The quick brown fox jumps over the lazy dog."),
            (2, "Fast brown foxes leap over sleeping dogs in the park."),
        ])
    }

    fn parse(input: &str) -> QueryNode {
        QueryParser::parse(input).unwrap()
    }

    #[test]
    fn test_single_term_ranks_shorter_doc_first() {
        let results = two_doc_corpus().search(&parse("brown"));
        let ids: Vec<DocId> = results.iter().map(|&(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_operators_do_not_filter_candidates() {
        // Union semantics: every doc matching any bag term is a candidate.
        let searcher = two_doc_corpus();
        let and_results = searcher.search(&parse("quick AND park"));
        assert_eq!(and_results.len(), 2);
        let not_results = searcher.search(&parse("brown AND NOT park"));
        assert_eq!(not_results.len(), 2);
    }

    #[test]
    fn test_phrase_contributes_token_bag() {
        let results = two_doc_corpus().search(&parse("\"brown fox\""));
        let ids: Vec<DocId> = results.iter().map(|&(id, _)| id).collect();
        // Doc 1 matches both terms, doc 2 only "brown"; doc 1 ranks first.
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_unknown_terms_yield_empty() {
        assert!(two_doc_corpus().search(&parse("zebra")).is_empty());
    }

    #[test]
    fn test_results_sorted_by_score_then_doc_id() {
        let searcher = searcher_over(&[
            (1, "shared words here"),
            (2, "shared words here"),
            (3, "shared words here plus extra padding tokens"),
        ]);
        let results = searcher.search(&parse("shared"));
        let ids: Vec<DocId> = results.iter().map(|&(id, _)| id).collect();
        // Docs 1 and 2 tie and sort by id; doc 3 is longer and scores lower.
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(results[0].1, results[1].1);
        assert!(results[1].1 > results[2].1);
    }

    #[test]
    fn test_limit_and_min_score() {
        let searcher = two_doc_corpus();
        let params = SearchParams {
            limit: 1,
            min_score: 0.0,
        };
        assert_eq!(searcher.search_with_params(&parse("brown"), &params).len(), 1);

        let params = SearchParams {
            limit: usize::MAX,
            min_score: f64::MAX,
        };
        assert!(searcher.search_with_params(&parse("brown"), &params).is_empty());
    }

    #[test]
    fn test_ranked_suggestions_cover_the_corpus() {
        let searcher = two_doc_corpus();
        let suggestions = searcher.ranked_suggestions("quick");
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].0, 1);
        assert_eq!(suggestions[1].1, 0.0);
    }
}
