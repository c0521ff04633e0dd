use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::LanguageCode;
use crate::presentation::state::AppState;

use super::types::{ErrorResponse, TranscriptionResponse};

fn bad_request(message: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}

/// Multipart `file` plus optional `language`. Recognition failures are
/// reported as `{error}` with 200; a missing or unreadable upload is a 400.
#[tracing::instrument(skip(state, multipart))]
pub async fn speech_to_text_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut audio: Option<Vec<u8>> = None;
    let mut language = LanguageCode::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                match field.bytes().await {
                    Ok(data) => {
                        tracing::debug!(filename = %filename, bytes = data.len(), "Audio received");
                        audio = Some(data.to_vec());
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read audio bytes");
                        return bad_request(format!("Failed to read file: {}", e));
                    }
                }
            }
            Some("language") => match field.text().await {
                Ok(text) => language = LanguageCode::new(&text),
                Err(e) => return bad_request(format!("Failed to read language: {}", e)),
            },
            _ => {}
        }
    }

    let Some(audio) = audio else {
        tracing::warn!("Speech-to-text request with no file");
        return bad_request("No file uploaded".to_string());
    };

    match state
        .transcription_service
        .transcribe(&audio, &language)
        .await
    {
        Ok(transcription) => {
            tracing::info!(
                chars = transcription.len(),
                language = %language,
                "Transcription ready"
            );
            (StatusCode::OK, Json(TranscriptionResponse { transcription })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            (
                StatusCode::OK,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
