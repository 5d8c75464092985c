//! Extractive summarization
//!
//! Splitter, similarity estimator and graph ranker wired together: the
//! summary is the top-K sentences of the document, verbatim, in score
//! order and joined by single spaces.

use super::selector::SentenceSelector;
use crate::errors::{ConvergenceWarning, Result, SummarizeError};
use crate::nlp::splitter::SentenceSplitter;
use crate::pagerank::{GraphRanker, PageRankResult};
use crate::similarity::SimilarityEstimator;
use crate::types::{Sentence, SummarizerConfig};
use tracing::debug;

/// Number of sentences returned when the caller does not say
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Summarize `text` into its `count` most central sentences
///
/// Uses the default configuration (English stopwords, damping 0.85).
pub fn extractive_summarize(text: &str, count: usize) -> Result<String> {
    ExtractiveSummarizer::new().summarize_with_count(text, count)
}

/// A summary together with the ranking that produced it
#[derive(Debug, Clone)]
pub struct ExtractiveSummary {
    /// Selected sentences joined by single spaces
    pub text: String,
    /// Selected sentences with scores, highest score first
    pub sentences: Vec<Sentence>,
    /// Scores for every sentence of the document
    pub ranking: PageRankResult,
    /// Set when ranking stopped at the iteration cap
    pub warning: Option<ConvergenceWarning>,
}

/// Graph-based extractive summarizer
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
    splitter: SentenceSplitter,
    estimator: SimilarityEstimator,
    ranker: GraphRanker,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self::build(SummarizerConfig::default())
    }

    /// Create a summarizer with a validated configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SummarizerConfig) -> Self {
        Self {
            splitter: SentenceSplitter::new(),
            estimator: SimilarityEstimator::from_config(&config),
            ranker: GraphRanker::from_config(&config),
            config,
        }
    }

    /// Replace the sentence splitter
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize using the configured sentence count
    pub fn summarize(&self, text: &str) -> Result<String> {
        self.summarize_with_count(text, self.config.num_sentences)
    }

    /// Summarize into at most `count` sentences
    pub fn summarize_with_count(&self, text: &str, count: usize) -> Result<String> {
        self.summarize_detailed(text, count).map(|summary| summary.text)
    }

    /// Summarize and keep the intermediate ranking
    pub fn summarize_detailed(&self, text: &str, count: usize) -> Result<ExtractiveSummary> {
        if count == 0 {
            return Err(SummarizeError::invalid_input(
                "sentence count must be at least 1",
            ));
        }

        let sentences = self.splitter.split(text)?;
        debug!(sentences = sentences.len(), count, "split document");

        // Nothing to rank
        if sentences.len() == 1 {
            let ranking = PageRankResult::uniform(1);
            let only = sentences[0].clone().with_score(1.0);
            return Ok(ExtractiveSummary {
                text: only.text.clone(),
                sentences: vec![only],
                ranking,
                warning: None,
            });
        }

        let matrix = self.estimator.estimate(&sentences)?;
        let ranking = self.ranker.rank(&matrix);
        let warning = ranking.convergence_warning();

        let selected = SentenceSelector::new(count).select(&sentences, &ranking);
        let text = SentenceSelector::join(&selected);

        Ok(ExtractiveSummary {
            text,
            sentences: selected,
            ranking,
            warning,
        })
    }
}
