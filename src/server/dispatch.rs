//! Task routing between the extractive and abstractive summarizers
//!
//! Callers always get a string back: any failure is logged and replaced
//! by [`FAILURE_SENTINEL`].

use std::sync::Arc;

use tracing::{debug, error};

use crate::errors::{Result, SummarizeError};
use crate::summarizer::{AbstractiveSummarizer, ExtractiveSummarizer};

/// Returned in place of a summary when summarization fails
pub const FAILURE_SENTINEL: &str = "Error: Summarization request failed.";

/// Which summarizer handles a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryTask {
    Extractive,
    #[default]
    Abstractive,
}

impl SummaryTask {
    /// Task named by a request
    ///
    /// Absent means abstractive; any name other than `abstractive` means
    /// extractive.
    pub fn from_request(task: Option<&str>) -> Self {
        match task {
            None => Self::Abstractive,
            Some(name) if name.trim().eq_ignore_ascii_case("abstractive") => Self::Abstractive,
            Some(_) => Self::Extractive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Abstractive => "abstractive",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    extractive: Arc<ExtractiveSummarizer>,
    abstractive: AbstractiveSummarizer,
}

impl Dispatcher {
    pub fn new(extractive: ExtractiveSummarizer, abstractive: AbstractiveSummarizer) -> Self {
        Self {
            extractive: Arc::new(extractive),
            abstractive,
        }
    }

    /// Sentence count used when a request does not give one
    pub fn default_sentences(&self) -> usize {
        self.extractive.config().num_sentences
    }

    /// Run the task, returning the summary or the first error
    ///
    /// Extractive work is CPU-bound and runs on the blocking pool.
    pub async fn try_dispatch(
        &self,
        text: &str,
        task: SummaryTask,
        num_sentences: Option<usize>,
    ) -> Result<String> {
        match task {
            SummaryTask::Extractive => {
                let summarizer = Arc::clone(&self.extractive);
                let count = num_sentences.unwrap_or_else(|| self.default_sentences());
                let text = text.to_string();

                tokio::task::spawn_blocking(move || summarizer.summarize_with_count(&text, count))
                    .await
                    .map_err(|e| {
                        SummarizeError::internal(format!("extractive task did not complete: {e}"))
                    })?
            }
            SummaryTask::Abstractive => self.abstractive.summarize(text).await,
        }
    }

    /// Abstractive summary of `text`, or the sentinel on failure
    pub async fn abstractive_summarize(&self, text: &str) -> String {
        self.dispatch(text, SummaryTask::Abstractive, None).await
    }

    /// Run the task, substituting [`FAILURE_SENTINEL`] for any error
    pub async fn dispatch(
        &self,
        text: &str,
        task: SummaryTask,
        num_sentences: Option<usize>,
    ) -> String {
        match self.try_dispatch(text, task, num_sentences).await {
            Ok(summary) => {
                debug!(task = task.as_str(), chars = summary.len(), "summary produced");
                summary
            }
            Err(e) => {
                error!(task = task.as_str(), "Request failed: {}", e);
                FAILURE_SENTINEL.to_string()
            }
        }
    }
}
