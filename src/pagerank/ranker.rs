//! Similarity-matrix ranking
//!
//! Glues graph construction and PageRank together: similarity matrix in,
//! score vector out.

use super::{PageRankResult, StandardPageRank};
use crate::graph::csr::CsrGraph;
use crate::similarity::SimilarityMatrix;
use crate::types::SummarizerConfig;
use tracing::{debug, warn};

/// Ranks sentences by centrality in their similarity graph
#[derive(Debug, Clone, Default)]
pub struct GraphRanker {
    pagerank: StandardPageRank,
    self_loops: bool,
    min_similarity: f64,
}

impl GraphRanker {
    /// Create a ranker around a configured PageRank
    pub fn new(pagerank: StandardPageRank) -> Self {
        Self {
            pagerank,
            self_loops: false,
            min_similarity: 0.0,
        }
    }

    /// Create a ranker from summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(StandardPageRank::from_config(config))
            .with_self_loops(config.self_loops)
            .with_min_similarity(config.min_similarity)
    }

    /// Use the matrix diagonal as self-loop edges
    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Drop edges with similarity at or below `min_similarity`
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    /// Score every sentence of the matrix
    pub fn rank(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        let graph = CsrGraph::from_similarity(matrix, self.self_loops, self.min_similarity);
        let result = self.pagerank.run(&graph);

        debug!(
            nodes = graph.num_nodes,
            edges = graph.num_edges(),
            iterations = result.iterations,
            "ranked sentence graph"
        );
        if let Some(warning) = result.convergence_warning() {
            warn!("{}", warning);
        }

        result
    }
}
