//! Sparse term vectors
//!
//! A sentence is represented as a sparse, L2-normalised vector over the
//! document vocabulary. Entries are kept sorted by term id so that dot
//! products are a single merge pass and always add up in the same order.

use std::cmp::Ordering;

/// A sparse unit vector over vocabulary term ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: (term id, weight), sorted by term id
    entries: Vec<(u32, f64)>,
    /// L2 norm of the vector before normalisation
    pub norm: f64,
}

impl TermVector {
    /// Create a new empty (zero) vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw (term id, weight) pairs
    ///
    /// Zero and negative weights are discarded, duplicate ids are summed,
    /// and the result is scaled to unit length.
    pub fn from_weights(mut weights: Vec<(u32, f64)>) -> Self {
        weights.retain(|&(_, w)| w > 0.0);
        weights.sort_by_key(|&(id, _)| id);

        let mut entries: Vec<(u32, f64)> = Vec::with_capacity(weights.len());
        for (id, weight) in weights {
            match entries.last_mut() {
                Some((last_id, last_weight)) if *last_id == id => *last_weight += weight,
                _ => entries.push((id, weight)),
            }
        }

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= norm;
            }
        }

        Self { entries, norm }
    }

    /// Cosine similarity with another vector, clamped to [0, 1]
    ///
    /// Both vectors are unit length, so this is their dot product.
    /// A zero vector has similarity 0.0 with everything.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let mut dot = 0.0;
        let (mut i, mut j) = (0, 0);

        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_weight) = self.entries[i];
            let (b_id, b_weight) = other.entries[j];
            match a_id.cmp(&b_id) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    dot += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        dot.clamp(0.0, 1.0)
    }

    /// Weight of a term, or 0.0 when absent
    pub fn weight(&self, term_id: u32) -> f64 {
        self.entries
            .binary_search_by_key(&term_id, |&(id, _)| id)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Non-zero entries in term id order
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// Number of non-zero dimensions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector is the zero vector
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
