//! Okapi BM25 scoring over the inverted index.

use ahash::{AHashMap, AHashSet};

use crate::index::inverted::InvertedIndex;
use crate::index::posting::DocId;

/// BM25 parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document-length normalization.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 1.5, b: 0.75 }
    }
}

/// Scores documents for a bag of query terms.
///
/// Borrows the index for the duration of one evaluation; queries never hold
/// scoring state across calls.
#[derive(Debug)]
pub struct Bm25Scorer<'a> {
    index: &'a InvertedIndex,
    params: Bm25Params,
}

impl<'a> Bm25Scorer<'a> {
    /// Create a scorer with default parameters.
    pub fn new(index: &'a InvertedIndex) -> Self {
        Bm25Scorer {
            index,
            params: Bm25Params::default(),
        }
    }

    /// Create a scorer with explicit parameters.
    pub fn with_params(index: &'a InvertedIndex, params: Bm25Params) -> Self {
        Bm25Scorer { index, params }
    }

    /// Inverse document frequency of `term`.
    ///
    /// `ln((N − df + 0.5) / (df + 0.5) + 1)` with `N` floored at 1; always
    /// positive, stable for terms present in every document.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.index.document_count().max(1) as f64;
        let df = self.index.doc_freq(term) as f64;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// Score every document containing at least one term of `terms`.
    ///
    /// Each distinct term contributes once per document regardless of its
    /// multiplicity in the bag. Results are ordered by score descending,
    /// ties broken by document id ascending.
    pub fn score_terms(&self, terms: &[String]) -> Vec<(DocId, f64)> {
        let mut scores: AHashMap<DocId, f64> = AHashMap::new();
        self.accumulate(terms, &mut scores);
        Self::into_ranked(scores)
    }

    /// Score the entire corpus against `terms`, zero-score ties included.
    ///
    /// Advisory surface for suggestion fallbacks: every indexed document
    /// appears in the result.
    pub fn score_all_docs(&self, terms: &[String]) -> Vec<(DocId, f64)> {
        let mut scores: AHashMap<DocId, f64> = self
            .index
            .all_doc_ids()
            .into_iter()
            .map(|doc_id| (doc_id, 0.0))
            .collect();
        self.accumulate(terms, &mut scores);
        Self::into_ranked(scores)
    }

    fn accumulate(&self, terms: &[String], scores: &mut AHashMap<DocId, f64>) {
        let avg_len = self.index.avg_doc_length();
        let mut seen: AHashSet<&str> = AHashSet::new();
        for term in terms {
            if !seen.insert(term.as_str()) {
                continue;
            }
            let idf = self.idf(term);
            for posting in self.index.postings(term) {
                let tf = f64::from(posting.term_freq());
                let dl = f64::from(self.index.doc_length(posting.doc_id));
                let norm = if avg_len == 0.0 { 0.0 } else { dl / avg_len };
                let contrib = idf * (tf * (self.params.k1 + 1.0))
                    / (tf + self.params.k1 * (1.0 - self.params.b + self.params.b * norm));
                *scores.entry(posting.doc_id).or_insert(0.0) += contrib;
            }
        }
    }

    fn into_ranked(scores: AHashMap<DocId, f64>) -> Vec<(DocId, f64)> {
        let mut ranked: Vec<(DocId, f64)> = scores.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with(docs: &[(DocId, &[&str])]) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for &(doc_id, terms) in docs {
            for (position, term) in terms.iter().enumerate() {
                index.add_term(term, doc_id, position as u32);
            }
            index.set_doc_length(doc_id, terms.len() as u32);
        }
        index
    }

    #[test]
    fn test_idf_formula() {
        // Two docs, both containing "brown": idf = ln(0.5/2.5 + 1) = ln(1.2).
        let index = index_with(&[(1, &["brown", "fox"]), (2, &["brown", "dog"])]);
        let scorer = Bm25Scorer::new(&index);
        assert!((scorer.idf("brown") - 1.2f64.ln()).abs() < 1e-12);
        // One doc containing "fox": idf = ln(1.5/1.5 + 1) = ln(2).
        assert!((scorer.idf("fox") - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_on_empty_corpus_uses_n_of_one() {
        let index = InvertedIndex::new();
        let scorer = Bm25Scorer::new(&index);
        assert!((scorer.idf("anything") - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_shorter_doc_wins_on_equal_tf() {
        let index = index_with(&[
            (1, &["quick", "brown", "fox", "jumps", "over", "lazy", "dog"]),
            (2, &["fast", "brown", "foxes", "leap", "over", "sleeping", "dogs", "park"]),
        ]);
        let scorer = Bm25Scorer::new(&index);
        let ranked = scorer.score_terms(&["brown".to_string()]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, 1);
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[test]
    fn test_ties_break_by_doc_id() {
        let index = index_with(&[(2, &["same", "words"]), (1, &["same", "words"])]);
        let scorer = Bm25Scorer::new(&index);
        let ranked = scorer.score_terms(&["same".to_string()]);
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[1].0, 2);
    }

    #[test]
    fn test_duplicate_query_terms_contribute_once() {
        let index = index_with(&[(1, &["fox", "den"])]);
        let scorer = Bm25Scorer::new(&index);
        let once = scorer.score_terms(&["fox".to_string()]);
        let twice = scorer.score_terms(&["fox".to_string(), "fox".to_string()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_score_all_docs_includes_zero_ties() {
        let index = index_with(&[(1, &["fox", "den"]), (2, &["owl", "nest"])]);
        let scorer = Bm25Scorer::new(&index);
        let ranked = scorer.score_all_docs(&["fox".to_string()]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[1], (2, 0.0));
    }

    #[test]
    fn test_empty_corpus_scores_nothing() {
        let index = InvertedIndex::new();
        let scorer = Bm25Scorer::new(&index);
        assert!(scorer.score_terms(&["fox".to_string()]).is_empty());
    }
}
