//! Sentence similarity
//!
//! TF-IDF term vectors and the pairwise cosine similarity matrix built
//! from them.

pub mod matrix;
pub mod tfidf;
pub mod vector;

pub use matrix::{SimilarityEstimator, SimilarityMatrix};
pub use tfidf::{TfidfModel, TfidfVectorizer};
pub use vector::TermVector;
