use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};

use crate::application::ports::TranscriptionError;
use crate::domain::LanguageCode;

fn request_failed(stage: &str, e: impl std::fmt::Display) -> TranscriptionError {
    TranscriptionError::ApiRequestFailed(format!("{}: {}", stage, e))
}

/// `file` part carrying the converted WAV plus the `language` hint.
pub(super) fn upload_form(
    wav_data: &[u8],
    language: &LanguageCode,
) -> Result<Form, TranscriptionError> {
    let file = Part::bytes(wav_data.to_vec())
        .file_name("upload.wav")
        .mime_str("audio/wav")
        .map_err(|e| request_failed("mime", e))?;

    Ok(Form::new()
        .text("language", language.to_string())
        .part("file", file))
}

pub(super) async fn send(request: reqwest::RequestBuilder) -> Result<Response, TranscriptionError> {
    let response = request
        .send()
        .await
        .map_err(|e| request_failed("request", e))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::error!(%status, "Whisper endpoint rejected credentials");
    }
    Err(request_failed(&format!("status {}", status), body.trim()))
}

pub(super) async fn read_body(response: Response) -> Result<String, TranscriptionError> {
    response.text().await.map_err(|e| request_failed("body", e))
}
