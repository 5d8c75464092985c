//! Sentence similarity matrix
//!
//! Pairwise cosine similarity of the TF-IDF sentence vectors. The matrix
//! is square and symmetric with a diagonal of 1.0. A sentence whose terms
//! are all stopwords has similarity 0.0 with every other sentence.

use super::tfidf::TfidfVectorizer;
use crate::errors::{Result, SummarizeError};
use crate::types::{Sentence, SummarizerConfig};
use tracing::debug;

/// Symmetric tolerance used when validating externally supplied matrices
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A dense, row-major, N x N similarity matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// The N x N identity: every sentence similar only to itself
    pub fn identity(size: usize) -> Self {
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            values[i * size + i] = 1.0;
        }
        Self { size, values }
    }

    /// Build from explicit rows
    ///
    /// Rows must form a square, symmetric matrix with finite entries in [0, 1].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SummarizeError::invalid_input(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            if let Some(v) = row.iter().find(|v| !v.is_finite() || !(0.0..=1.0).contains(*v)) {
                return Err(SummarizeError::invalid_input(format!(
                    "row {} contains {} outside [0, 1]",
                    i, v
                )));
            }
            values.extend(row);
        }

        let matrix = Self { size, values };
        for i in 0..size {
            for j in (i + 1)..size {
                if (matrix.get(i, j) - matrix.get(j, i)).abs() > SYMMETRY_TOLERANCE {
                    return Err(SummarizeError::invalid_input(format!(
                        "matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }

        Ok(matrix)
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i` of the matrix
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Check whether every off-diagonal entry is zero
    pub fn is_disconnected(&self) -> bool {
        (0..self.size).all(|i| {
            self.row(i)
                .iter()
                .enumerate()
                .all(|(j, &v)| i == j || v == 0.0)
        })
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }
}

/// Computes the similarity matrix of a document's sentences
#[derive(Debug, Clone, Default)]
pub struct SimilarityEstimator {
    vectorizer: TfidfVectorizer,
}

impl SimilarityEstimator {
    /// Create an estimator around a configured vectorizer
    pub fn new(vectorizer: TfidfVectorizer) -> Self {
        Self { vectorizer }
    }

    /// Create an estimator from summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(TfidfVectorizer::from_config(config))
    }

    /// Similarity matrix for split sentences
    pub fn estimate(&self, sentences: &[Sentence]) -> Result<SimilarityMatrix> {
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        self.estimate_texts(&texts)
    }

    /// Similarity matrix for raw sentence strings
    pub fn estimate_texts<S: AsRef<str>>(&self, sentences: &[S]) -> Result<SimilarityMatrix> {
        if sentences.is_empty() {
            return Err(SummarizeError::invalid_input(
                "similarity needs at least one sentence",
            ));
        }

        let model = self.vectorizer.fit_transform(sentences);
        debug!(
            sentences = sentences.len(),
            vocabulary = model.vocabulary.len(),
            "fitted tf-idf vectors"
        );

        let mut matrix = SimilarityMatrix::identity(sentences.len());
        for i in 0..model.vectors.len() {
            for j in (i + 1)..model.vectors.len() {
                let similarity = model.vectors[i].cosine_similarity(&model.vectors[j]);
                if similarity > 0.0 {
                    matrix.set_pair(i, j, similarity);
                }
            }
        }

        Ok(matrix)
    }
}
