use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::Query;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::types::{AnswerResponse, QuestionRequest};

#[tracing::instrument(skip(state, request))]
pub async fn compare_handler(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> impl IntoResponse {
    let query = Query::new(&request.question, &request.language);
    tracing::debug!(question = %sanitize_for_log(&query.question), "Processing compare");

    let answer = state.answer_service.compare(&query).await;
    tracing::info!(kind = ?answer.kind, translated = answer.translated, "Comparison ready");

    (
        StatusCode::OK,
        Json(AnswerResponse {
            response: answer.text,
            audio_url: None,
        }),
    )
}
