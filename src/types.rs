//! Core types for lexrank_scribe
//!
//! This module defines the data structures shared by the pipeline stages:
//! sentences carved out of a document and the summarizer configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence within a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, verbatim from the document
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Centrality score assigned by the ranker
    pub score: f64,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            score: 0.0,
        }
    }

    /// Builder method: attach a score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for extractive summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when L1 delta < threshold)
    pub convergence_threshold: f64,
    /// Number of sentences in the summary
    pub num_sentences: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Use the similarity diagonal as self-loop edges
    #[serde(default)]
    pub self_loops: bool,
    /// Similarities at or below this value do not become edges
    #[serde(default)]
    pub min_similarity: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            num_sentences: 3,
            language: "en".to_string(),
            stopwords: Vec::new(),
            self_loops: false,
            min_similarity: 0.0,
        }
    }
}

impl SummarizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold <= 0.0 {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.num_sentences == 0 {
            return Err(SummarizeError::invalid_config("num_sentences must be > 0"));
        }

        if !(0.0..1.0).contains(&self.min_similarity) {
            return Err(SummarizeError::invalid_config(format!(
                "min_similarity must be in [0, 1), got {}",
                self.min_similarity
            )));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set the summary length in sentences
    pub fn with_num_sentences(mut self, num_sentences: usize) -> Self {
        self.num_sentences = num_sentences;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: toggle self-loop edges
    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Builder method: set the edge cut-off
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }
}
