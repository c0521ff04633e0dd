use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::Query;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::types::{AnswerResponse, QuestionRequest};

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> impl IntoResponse {
    let query = Query::new(&request.question, &request.language);
    tracing::debug!(
        question = %sanitize_for_log(&query.question),
        language = %query.language,
        "Processing ask"
    );

    let answer = state.answer_service.ask(&query).await;
    tracing::info!(
        kind = ?answer.kind,
        language = %answer.language,
        translated = answer.translated,
        "Answer ready"
    );

    let audio_url = if state.settings.speech.synthesize_answers {
        match state
            .speech_service
            .speak(&answer.text, &answer.language)
            .await
        {
            Ok(handle) => Some(state.settings.public_audio_url(&handle.file_name)),
            Err(e) => {
                tracing::warn!(error = %e, "Answer synthesis failed, returning text only");
                None
            }
        }
    } else {
        None
    };

    (
        StatusCode::OK,
        Json(AnswerResponse {
            response: answer.text,
            audio_url,
        }),
    )
}
