use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::LanguageCode;
use crate::presentation::state::AppState;

use super::types::{AudioResponse, ErrorResponse, QuestionRequest};

/// Speaks the submitted text as-is; failures come back as `{error}` with 200.
#[tracing::instrument(skip(state, request))]
pub async fn text_to_speech_handler(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> impl IntoResponse {
    let language = LanguageCode::new(&request.language);

    match state
        .speech_service
        .speak(&request.question, &language)
        .await
    {
        Ok(handle) => {
            tracing::info!(file = %handle.file_name, reused = handle.reused, "Speech ready");
            (
                StatusCode::OK,
                Json(AudioResponse {
                    audio_url: state.settings.public_audio_url(&handle.file_name),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, language = %language, "Speech synthesis failed");
            (
                StatusCode::OK,
                Json(ErrorResponse {
                    error: format!("Speech synthesis failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
