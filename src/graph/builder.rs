//! Graph builder with efficient edge handling
//!
//! One node per sentence; undirected edges weighted by sentence
//! similarity. Uses FxHashMap adjacency for O(1) edge updates during
//! construction, then freezes into [`CsrGraph`](super::csr::CsrGraph).

use crate::similarity::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable, undirected, weighted graph builder
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Node storage, indexed by sentence position
    nodes: Vec<BuilderNode>,
    /// Whether `add_edge(i, i, w)` is honoured
    allow_self_loops: bool,
}

impl GraphBuilder {
    /// Create a builder with `node_count` isolated nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); node_count],
            allow_self_loops: false,
        }
    }

    /// Allow or forbid self-loop edges
    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    /// Build the sentence graph for a similarity matrix
    ///
    /// Off-diagonal entries above `min_weight` become edges. The diagonal
    /// becomes a self-loop only when `self_loops` is set.
    pub fn from_similarity(matrix: &SimilarityMatrix, self_loops: bool, min_weight: f64) -> Self {
        let n = matrix.size();
        let mut builder = Self::new(n).with_self_loops(self_loops);

        for i in 0..n {
            let row = matrix.row(i);
            let start = if self_loops { i } else { i + 1 };
            for (j, &weight) in row.iter().enumerate().skip(start) {
                if weight > min_weight {
                    builder.add_edge(i as u32, j as u32, weight);
                }
            }
        }

        builder
    }

    /// Add an undirected edge, replacing any previous weight
    ///
    /// Non-positive weights and out-of-range nodes are ignored.
    pub fn add_edge(&mut self, from: u32, to: u32, weight: f64) {
        if weight <= 0.0 || from as usize >= self.nodes.len() || to as usize >= self.nodes.len() {
            return;
        }
        if from == to {
            if self.allow_self_loops {
                self.nodes[from as usize].edges.insert(to, weight);
            }
            return;
        }

        self.nodes[from as usize].edges.insert(to, weight);
        self.nodes[to as usize].edges.insert(from, weight);
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of undirected edges (self-loops count once)
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| node.edges.keys().map(move |&j| (i as u32, j)))
            .filter(|&(i, j)| i <= j)
            .count()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(builder: &GraphBuilder, from: u32, to: u32) -> Option<f64> {
        builder
            .nodes()
            .find(|&(id, _)| id == from)
            .and_then(|(_, node)| node.edges.get(&to).copied())
    }

    #[test]
    fn test_graph_builder_basic() {
        let mut builder = GraphBuilder::new(3);
        builder.add_edge(0, 1, 0.5);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 1);
        assert_eq!(weight(&builder, 1, 0), Some(0.5));
    }

    #[test]
    fn test_edge_replaced_not_accumulated() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(0, 1, 0.5);
        builder.add_edge(1, 0, 0.25);

        assert_eq!(weight(&builder, 0, 1), Some(0.25));
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn test_self_loops_prevented_by_default() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(0, 0, 1.0);

        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_self_loops_when_enabled() {
        let mut builder = GraphBuilder::new(2).with_self_loops(true);
        builder.add_edge(0, 0, 1.0);

        assert_eq!(builder.edge_count(), 1);
        assert_eq!(weight(&builder, 0, 0), Some(1.0));
    }

    #[test]
    fn test_zero_weight_and_out_of_range_ignored() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(0, 1, 0.0);
        builder.add_edge(0, 5, 0.3);

        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_from_similarity() {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.4, 0.0],
            vec![0.4, 1.0, 0.1],
            vec![0.0, 0.1, 1.0],
        ])
        .unwrap();

        let builder = GraphBuilder::from_similarity(&matrix, false, 0.0);
        assert_eq!(builder.edge_count(), 2);

        let with_loops = GraphBuilder::from_similarity(&matrix, true, 0.0);
        assert_eq!(with_loops.edge_count(), 5);

        let pruned = GraphBuilder::from_similarity(&matrix, false, 0.2);
        assert_eq!(pruned.edge_count(), 1);
    }
}
