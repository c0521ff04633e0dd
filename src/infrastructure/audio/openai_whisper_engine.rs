use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::LanguageCode;

use super::whisper_upload::{read_body, send, upload_form};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// Hosted Whisper behind `/audio/transcriptions`, asked for a plain-text reply.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            api_key,
            url: format!("{}/audio/transcriptions", base.trim_end_matches('/')),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        wav_data: &[u8],
        language: &LanguageCode,
    ) -> Result<String, TranscriptionError> {
        let form = upload_form(wav_data, language)?
            .text("model", self.model.clone())
            .text("response_format", "text");

        tracing::debug!(
            model = %self.model,
            language = %language,
            bytes = wav_data.len(),
            "Uploading to Whisper"
        );

        let request = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .multipart(form);
        let transcript = read_body(send(request).await?).await?;

        tracing::info!(chars = transcript.len(), "Whisper transcript received");
        Ok(transcript.trim().to_string())
    }
}
