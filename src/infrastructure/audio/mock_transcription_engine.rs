use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::LanguageCode;

/// Echoes the language hint and payload size instead of recognising speech.
pub struct MockTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        wav_data: &[u8],
        language: &LanguageCode,
    ) -> Result<String, TranscriptionError> {
        Ok(format!("mock transcript [{}] {} bytes", language, wav_data.len()))
    }
}
