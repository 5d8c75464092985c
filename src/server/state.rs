use std::sync::Arc;

use tracing::warn;

use super::config::Settings;
use super::dispatch::Dispatcher;
use super::error::ServerError;
use crate::client::GeminiClient;
use crate::summarizer::{
    AbstractiveSummarizer, ExtractiveSummarizer, TextGenerator, UnconfiguredGenerator,
    VariationDecorator,
};
use crate::types::SummarizerConfig;

/// Shared state for the summarize handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub variation: Arc<VariationDecorator>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, variation: VariationDecorator) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            variation: Arc::new(variation),
        }
    }

    /// Wire the summarizers described by `settings`
    ///
    /// Without an API key the abstractive path stays available but every
    /// request to it fails as unavailable.
    pub fn from_settings(settings: &Settings) -> Result<Self, ServerError> {
        let config = SummarizerConfig::default().with_num_sentences(settings.summary_sentences);
        let extractive = ExtractiveSummarizer::with_config(config)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let generator: Arc<dyn TextGenerator> = match &settings.google_api_key {
            Some(key) => Arc::new(
                GeminiClient::new(
                    &settings.gemini_base_url,
                    &settings.gemini_model,
                    key.clone(),
                    settings.gemini_timeout,
                )
                .map_err(|e| ServerError::Config(e.to_string()))?,
            ),
            None => {
                warn!("GOOGLE_API_KEY is not set; abstractive summaries are disabled");
                Arc::new(UnconfiguredGenerator::new("GOOGLE_API_KEY is not set"))
            }
        };

        let dispatcher = Dispatcher::new(extractive, AbstractiveSummarizer::new(generator));
        Ok(Self::new(dispatcher, VariationDecorator::default()))
    }
}
