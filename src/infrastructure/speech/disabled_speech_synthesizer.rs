use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::LanguageCode;

pub struct DisabledSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for DisabledSpeechSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _language: &LanguageCode,
    ) -> Result<Bytes, SynthesisError> {
        Err(SynthesisError::Disabled)
    }
}
