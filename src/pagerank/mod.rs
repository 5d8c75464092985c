//! Graph ranking
//!
//! Stationary-distribution (PageRank) scoring of the sentence graph.

pub mod ranker;
pub mod standard;

pub use ranker::GraphRanker;
pub use standard::StandardPageRank;

use crate::errors::ConvergenceWarning;

/// Scores closer than this are treated as tied when ordering nodes
pub const SCORE_TIE_RESOLUTION: f64 = 1e-9;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID), summing to 1
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1)
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Uniform distribution over `n` nodes
    pub fn uniform(n: usize) -> Self {
        let scores = if n == 0 {
            Vec::new()
        } else {
            vec![1.0 / n as f64; n]
        };
        Self::new(scores, 0, 0.0, true)
    }

    /// Node IDs ordered by score descending, ties by ID ascending
    pub fn ranked_order(&self) -> Vec<u32> {
        let mut order: Vec<u32> = (0..self.scores.len() as u32).collect();
        order.sort_by(|&a, &b| {
            let (qa, qb) = (tie_bucket(self.scores[a as usize]), tie_bucket(self.scores[b as usize]));
            qb.cmp(&qa).then(a.cmp(&b))
        });
        order
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Warning to surface when the iteration cap was hit
    pub fn convergence_warning(&self) -> Option<ConvergenceWarning> {
        if self.converged {
            None
        } else {
            Some(ConvergenceWarning::new(self.iterations, self.delta))
        }
    }
}

fn tie_bucket(score: f64) -> i64 {
    (score / SCORE_TIE_RESOLUTION).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let result = PageRankResult::uniform(4);
        assert_eq!(result.scores, vec![0.25; 4]);
        assert!(result.converged);
        assert!(PageRankResult::uniform(0).scores.is_empty());
    }

    #[test]
    fn test_ranked_order_breaks_ties_by_position() {
        let result = PageRankResult::new(vec![0.2, 0.4, 0.2, 0.2], 3, 0.0, true);
        assert_eq!(result.ranked_order(), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_near_equal_scores_are_ties() {
        let result = PageRankResult::new(vec![0.3, 0.3 + 1e-15, 0.4 - 1e-15], 3, 0.0, true);
        assert_eq!(result.ranked_order(), vec![2, 0, 1]);
    }

    #[test]
    fn test_convergence_warning() {
        let converged = PageRankResult::new(vec![1.0], 2, 0.0, true);
        assert!(converged.convergence_warning().is_none());

        let capped = PageRankResult::new(vec![1.0], 100, 0.01, false);
        let warning = capped.convergence_warning().unwrap();
        assert_eq!(warning.iterations, 100);
    }
}
