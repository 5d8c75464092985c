//! Abstractive summarization
//!
//! The generative model is an injected capability: anything implementing
//! [`TextGenerator`] can turn a prompt into text. The summarizer only
//! builds the prompt and checks that something usable came back.

use crate::errors::{Result, SummarizeError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Instruction placed in front of the document text
pub const DEFAULT_PROMPT_PREFIX: &str =
    "Summarize this text in highlighted bullet points and numbers: ";

/// A generative-language capability
///
/// Implementations report transport, auth and quota problems as
/// [`SummarizeError::ServiceUnavailable`] and unusable replies as
/// [`SummarizeError::ServiceResponse`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Stand-in generator for deployments without model credentials
#[derive(Debug, Clone)]
pub struct UnconfiguredGenerator {
    reason: String,
}

impl UnconfiguredGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(SummarizeError::service_unavailable(self.reason.clone()))
    }
}

/// Summarizes by prompting a [`TextGenerator`]
#[derive(Clone)]
pub struct AbstractiveSummarizer {
    generator: Arc<dyn TextGenerator>,
    prompt_prefix: String,
}

impl std::fmt::Debug for AbstractiveSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbstractiveSummarizer")
            .field("prompt_prefix", &self.prompt_prefix)
            .finish_non_exhaustive()
    }
}

impl AbstractiveSummarizer {
    /// Create a summarizer around a generator
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompt_prefix: DEFAULT_PROMPT_PREFIX.to_string(),
        }
    }

    /// Replace the instruction placed before the text
    pub fn with_prompt_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prompt_prefix = prefix.into();
        self
    }

    /// The full prompt sent for `text`
    pub fn build_prompt(&self, text: &str) -> String {
        format!("{}{}", self.prompt_prefix, text)
    }

    /// Summarize `text` through the generator
    pub async fn summarize(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(SummarizeError::invalid_input(
                "text must contain at least one non-whitespace character",
            ));
        }

        let prompt = self.build_prompt(text);
        debug!(prompt_len = prompt.len(), "requesting abstractive summary");

        let output = self.generator.generate(&prompt).await?;
        if output.trim().is_empty() {
            return Err(SummarizeError::service_response(
                "generator returned no text",
            ));
        }

        Ok(output)
    }
}
