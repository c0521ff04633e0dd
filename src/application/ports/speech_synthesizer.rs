use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::LanguageCode;

/// Turns text into an encoded (mp3) audio clip.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Bytes, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("nothing to synthesize")]
    EmptyText,
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("speech synthesis is disabled")]
    Disabled,
}
