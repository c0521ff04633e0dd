use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::LanguageCode;

use super::whisper_upload::{read_body, send, upload_form};

/// Whisper deployment on Azure OpenAI; replies with `{"text": ...}`.
pub struct AzureWhisperEngine {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl AzureWhisperEngine {
    pub fn new(endpoint: &str, deployment: &str, api_key: &str, api_version: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!(
                "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
                endpoint.trim_end_matches('/'),
                deployment,
                api_version,
            ),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct DeploymentReply {
    text: String,
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    async fn transcribe(
        &self,
        wav_data: &[u8],
        language: &LanguageCode,
    ) -> Result<String, TranscriptionError> {
        let form = upload_form(wav_data, language)?;

        tracing::debug!(
            language = %language,
            bytes = wav_data.len(),
            "Uploading to Azure Whisper deployment"
        );

        let request = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .multipart(form);
        let body = read_body(send(request).await?).await?;

        let reply: DeploymentReply = serde_json::from_str(&body).map_err(|e| {
            TranscriptionError::ApiRequestFailed(format!("unexpected reply: {}", e))
        })?;

        tracing::info!(chars = reply.text.len(), "Azure Whisper transcript received");
        Ok(reply.text.trim().to_string())
    }
}
