use async_trait::async_trait;

use crate::domain::LanguageCode;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        wav_data: &[u8],
        language: &LanguageCode,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine misconfigured: {0}")]
    Misconfigured(String),
    #[error("speech recognition is disabled")]
    Disabled,
}
