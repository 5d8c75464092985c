use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{field, info, instrument, Span};

use super::dispatch::SummaryTask;
use super::state::AppState;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub num_sentences: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            error: message.to_string(),
        })
    }
}

pub async fn health_handler() -> &'static str {
    info!("Health check requested");
    "Healthy"
}

#[instrument(skip_all, fields(task = field::Empty, chars = field::Empty))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Response {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            return (StatusCode::BAD_REQUEST, ErrorResponse::new("Text is required"))
                .into_response()
        }
    };

    let task = SummaryTask::from_request(request.task.as_deref());
    Span::current()
        .record("task", task.as_str())
        .record("chars", text.len());

    let summary = state
        .dispatcher
        .dispatch(text, task, request.num_sentences)
        .await;

    if summary.is_empty() {
        return ErrorResponse::new("Summarization failed").into_response();
    }

    Json(SummarizeResponse {
        summary: state.variation.apply(&summary),
    })
    .into_response()
}
