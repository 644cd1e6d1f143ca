//! HTTP handlers: assessment page, question selection, submission scoring,
//! and the audit export.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Json};
use serde::Serialize;
use tracing::{info, warn};

use super::AppState;
use crate::bank::select::{select_questions, PresentedQuestion};
use crate::core::{StyleSummary, Submission};
use crate::db::{ResponseRow, SummaryRecord};
use crate::error::AssessmentError;

/// Single-page client: identification form, instructions, question list,
/// results chart.
pub async fn index() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

#[derive(Serialize)]
pub struct AssessmentResponse {
    pub questions: Vec<PresentedQuestion>,
}

/// GET /api/assessment — a fresh random selection, shuffled across styles.
pub async fn api_assessment(
    State(state): State<AppState>,
) -> Result<Json<AssessmentResponse>, AssessmentError> {
    if state.bank.is_empty() {
        return Err(AssessmentError::MissingQuestionData(
            "no questions available".into(),
        ));
    }
    let questions = select_questions(&state.bank, state.config.scoring.max_per_style);
    Ok(Json(AssessmentResponse { questions }))
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub name: String,
    pub identifier: String,
    pub mode: &'static str,
    /// Vertical chart bound for the configured aggregation mode; scores fall
    /// in [-chart_max, chart_max].
    pub chart_max: f64,
    pub summaries: Vec<StyleSummary>,
}

/// POST /api/submit — validate, score, log, respond with per-style summaries.
pub async fn api_submit(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<ResultsResponse>, AssessmentError> {
    validate_submission(&submission)?;

    let summaries = state.engine.summarize(&state.bank, &submission);

    // Audit log is best-effort: a failed write must not cost the user
    // their results.
    if state.config.database.log_responses {
        if let Err(e) = log_submission(&state, &submission, &summaries) {
            warn!("Failed to log submission for {}: {e}", submission.identifier);
        }
    }

    info!(
        "Scored submission for {} ({} answers, {} styles)",
        submission.identifier,
        submission.answers.len(),
        summaries.len()
    );

    Ok(Json(ResultsResponse {
        name: submission.name.clone(),
        identifier: submission.identifier.clone(),
        mode: state.engine.mode().as_str(),
        chart_max: state.engine.chart_max(state.config.scoring.max_per_style),
        summaries,
    }))
}

/// Presence and domain checks. Completeness is judged against the presented
/// set echoed back by the client.
pub fn validate_submission(submission: &Submission) -> Result<(), AssessmentError> {
    let identifier = &submission.identifier;
    if identifier.len() != 8 || !identifier.chars().all(|c| c.is_ascii_digit()) {
        return Err(AssessmentError::InvalidIdentifier);
    }

    if submission.presented.is_empty() {
        return Err(AssessmentError::IncompleteSubmission {
            presented: 0,
            missing: 0,
        });
    }

    let mut missing = 0usize;
    for id in &submission.presented {
        match submission.answers.get(id) {
            Some(answer) => {
                if answer.level().is_none() {
                    return Err(AssessmentError::InvalidAnswer { question: *id });
                }
            }
            None => missing += 1,
        }
    }
    if missing > 0 {
        return Err(AssessmentError::IncompleteSubmission {
            presented: submission.presented.len(),
            missing,
        });
    }

    Ok(())
}

fn log_submission(
    state: &AppState,
    submission: &Submission,
    summaries: &[StyleSummary],
) -> Result<(), rusqlite::Error> {
    let mut rows = Vec::with_capacity(submission.answers.len());
    for (&question_id, answer) in &submission.answers {
        let Some(question) = state.bank.question(question_id) else {
            continue;
        };
        let style = state
            .bank
            .style_name(question.style_code)
            .unwrap_or("unknown")
            .to_string();
        rows.push(ResponseRow {
            identifier: submission.identifier.clone(),
            name: submission.name.clone(),
            style,
            question: question.text.clone(),
            answer: i64::from(answer.level().unwrap_or(0)),
        });
    }
    state
        .db
        .record_assessment(&submission.identifier, &rows, summaries)
}

/// GET /api/summaries/:identifier — audit export. Read-only; never feeds
/// back into scoring.
pub async fn api_summaries(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<Vec<SummaryRecord>>, AssessmentError> {
    let records = state.db.summaries_for(&identifier)?;
    Ok(Json(records))
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub response_count: usize,
    pub last_24h_count: usize,
    pub recent: Vec<SummaryRecord>,
}

/// GET /api/stats — log totals for export/audit dashboards.
pub async fn api_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AssessmentError> {
    let day_ago = chrono::Utc::now() - chrono::Duration::hours(24);
    Ok(Json(StatsResponse {
        response_count: state.db.response_count()?,
        last_24h_count: state.db.summaries_since(day_ago)?.len(),
        recent: state.db.recent_summaries(20)?,
    }))
}
