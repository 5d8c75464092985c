//! Top-K sentence selection
//!
//! Picks the highest-scoring sentences and keeps them in score order.
//! Equal scores fall back to document position so the output is
//! reproducible.

use crate::pagerank::PageRankResult;
use crate::types::Sentence;

/// Selects the top sentences of a ranked document
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    /// Number of sentences to select
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SentenceSelector {
    /// Create a selector returning at most `num_sentences`
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Select sentences by score
    ///
    /// Returned sentences carry their score and are ordered by score
    /// descending, then by position ascending. Sentences without a score
    /// in `ranking` are never selected.
    pub fn select(&self, sentences: &[Sentence], ranking: &PageRankResult) -> Vec<Sentence> {
        ranking
            .ranked_order()
            .into_iter()
            .filter_map(|id| sentences.get(id as usize))
            .take(self.num_sentences)
            .map(|s| s.clone().with_score(ranking.score(s.index as u32)))
            .collect()
    }

    /// Join selected sentences with a single space
    pub fn join(selected: &[Sentence]) -> String {
        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
