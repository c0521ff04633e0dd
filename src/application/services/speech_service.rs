use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError, SpeechSynthesizer, SynthesisError};
use crate::domain::{AudioKey, LanguageCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioHandle {
    pub key: AudioKey,
    pub file_name: String,
    pub reused: bool,
}

/// Synthesizes speech into the audio store, skipping synthesis when the clip already exists.
pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn AudioStore>,
}

impl SpeechService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, store: Arc<dyn AudioStore>) -> Self {
        Self { synthesizer, store }
    }

    pub async fn speak(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<AudioHandle, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::Synthesis(SynthesisError::EmptyText));
        }

        let key = AudioKey::derive(text, language);
        let file_name = key.file_name();

        if self.store.contains(&key).await? {
            tracing::debug!(file = %file_name, "Reusing synthesized audio");
            return Ok(AudioHandle {
                key,
                file_name,
                reused: true,
            });
        }

        let audio = self.synthesizer.synthesize(text, language).await?;
        let bytes = audio.len();
        self.store.put(&key, audio).await?;

        tracing::info!(file = %file_name, bytes, language = %language, "Synthesized audio stored");

        Ok(AudioHandle {
            key,
            file_name,
            reused: false,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("audio store: {0}")]
    Store(#[from] AudioStoreError),
}
