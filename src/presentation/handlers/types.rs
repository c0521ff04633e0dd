use serde::{Deserialize, Serialize};

/// Body shared by `/ask`, `/compare` and `/text-to-speech`.
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AudioResponse {
    pub audio_url: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
