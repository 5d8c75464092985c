//! Gemini `generateContent` client
//!
//! Implements [`TextGenerator`] over the Generative Language REST API.
//! Transport failures and non-2xx statuses map to `ServiceUnavailable`;
//! bodies that do not decode or carry no text map to `ServiceResponse`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{Result, SummarizeError};
use crate::summarizer::abstractive::TextGenerator;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-pro";

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn into_text(self) -> Result<String> {
        let blocked = self
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);

        let candidate = match self.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                return Err(SummarizeError::service_response(match blocked {
                    Some(reason) => format!("prompt blocked: {}", reason),
                    None => "response contained no candidates".to_string(),
                }))
            }
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(SummarizeError::service_response(format!(
                "candidate had no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(text)
    }
}

/// HTTP client for a Gemini model
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for `model` served under `base_url`
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizeError::internal(format!("failed to build HTTP client: {e}")))?;

        let mut base = Url::parse(base_url).map_err(|e| {
            SummarizeError::invalid_config(format!("invalid Gemini base URL {base_url}: {e}"))
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let endpoint = base
            .join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| {
                SummarizeError::invalid_config(format!("invalid Gemini model name {model}: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    /// The URL requests are posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizeError::service_unavailable(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SummarizeError::service_unavailable(format!("failed to read Gemini response: {e}"))
        })?;

        if !status.is_success() {
            warn!(%status, "Gemini returned error status");
            return Err(SummarizeError::service_unavailable(format!(
                "Gemini returned {}: {}",
                status,
                truncate(&body, MAX_ERROR_BODY)
            )));
        }

        debug!(bytes = body.len(), "received Gemini response");

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            SummarizeError::service_response(format!("failed to decode Gemini response: {e}"))
        })?;

        parsed.into_text()
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
