use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::LanguageCode;

/// Returns a fake mp3 payload and counts calls.
#[derive(Default)]
pub struct MockSpeechSynthesizer {
    calls: AtomicUsize,
}

impl MockSpeechSynthesizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Bytes, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Bytes::from(format!("ID3 mock [{}] {}", language, text)))
    }
}
