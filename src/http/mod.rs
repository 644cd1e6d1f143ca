pub mod routes;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::bank::QuestionBank;
use crate::config::Config;
use crate::db::SharedDatabase;
use crate::error::AssessmentError;
use crate::scoring::ScoreEngine;

/// Shared state for all handlers. The bank is built once at startup and
/// never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bank: Arc<QuestionBank>,
    pub engine: ScoreEngine,
    pub db: SharedDatabase,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/api/assessment", get(routes::api_assessment))
        .route("/api/submit", post(routes::api_submit))
        .route("/api/summaries/:identifier", get(routes::api_summaries))
        .route("/api/stats", get(routes::api_stats))
        .with_state(state)
}

impl IntoResponse for AssessmentError {
    fn into_response(self) -> Response {
        let status = match &self {
            AssessmentError::MissingQuestionData(_) => StatusCode::SERVICE_UNAVAILABLE,
            AssessmentError::IncompleteSubmission { .. }
            | AssessmentError::InvalidIdentifier
            | AssessmentError::InvalidAnswer { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AssessmentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
