use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health_handler, summarize_handler};
use super::state::AppState;

/// Build the application router
pub fn app(state: AppState) -> Router {
    let health_router = Router::new().route("/v1/health", get(health_handler));

    let summarize_router = Router::new()
        .route("/api/v1/summarize", post(summarize_handler))
        .with_state(state);

    Router::new()
        .merge(health_router)
        .merge(summarize_router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
