use std::sync::Arc;

use crate::application::ports::{
    AudioConverter, ConversionError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::LanguageCode;

pub struct TranscriptionService {
    converter: Arc<dyn AudioConverter>,
    engine: Arc<dyn TranscriptionEngine>,
    max_upload_bytes: usize,
}

impl TranscriptionService {
    pub fn new(
        converter: Arc<dyn AudioConverter>,
        engine: Arc<dyn TranscriptionEngine>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            converter,
            engine,
            max_upload_bytes,
        }
    }

    pub async fn transcribe(
        &self,
        upload: &[u8],
        language: &LanguageCode,
    ) -> Result<String, TranscriptionServiceError> {
        if upload.is_empty() {
            return Err(TranscriptionServiceError::EmptyUpload);
        }
        if upload.len() > self.max_upload_bytes {
            return Err(TranscriptionServiceError::UploadTooLarge {
                size: upload.len(),
                limit: self.max_upload_bytes,
            });
        }

        let wav = self.converter.to_wav(upload).await?;
        tracing::debug!(
            upload_bytes = upload.len(),
            wav_bytes = wav.len(),
            "Upload converted for recognition"
        );

        let transcript = self.engine.transcribe(&wav, language).await?;
        Ok(transcript)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("uploaded audio is empty")]
    EmptyUpload,
    #[error("uploaded audio is {size} bytes, limit is {limit}")]
    UploadTooLarge { size: usize, limit: usize },
    #[error("conversion: {0}")]
    Conversion(#[from] ConversionError),
    #[error("recognition: {0}")]
    Recognition(#[from] TranscriptionError),
}
