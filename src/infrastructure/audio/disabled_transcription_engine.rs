use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::LanguageCode;

pub struct DisabledTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for DisabledTranscriptionEngine {
    async fn transcribe(
        &self,
        _wav_data: &[u8],
        _language: &LanguageCode,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::Disabled)
    }
}
