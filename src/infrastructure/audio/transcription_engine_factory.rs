use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    AudioConverter, ConversionError, TranscriptionEngine, TranscriptionError,
};
use crate::presentation::config::{
    AudioConverterSetting, TranscriptionProviderSetting, TranscriptionSettings,
};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::disabled_transcription_engine::DisabledTranscriptionEngine;
use super::ffmpeg_converter::FfmpegAudioConverter;
use super::openai_whisper_engine::OpenAiWhisperEngine;
use super::symphonia_converter::SymphoniaAudioConverter;

const DEFAULT_AZURE_API_VERSION: &str = "2024-06-01";

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match settings.provider {
            TranscriptionProviderSetting::OpenAi => {
                let key = settings.api_key.clone().ok_or_else(|| {
                    TranscriptionError::Misconfigured(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                );
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Azure => {
                let endpoint = settings.azure_endpoint.as_deref().ok_or_else(|| {
                    TranscriptionError::Misconfigured("azure_endpoint required".to_string())
                })?;
                let deployment = settings.azure_deployment.as_deref().ok_or_else(|| {
                    TranscriptionError::Misconfigured("azure_deployment required".to_string())
                })?;
                let key = settings.api_key.as_deref().ok_or_else(|| {
                    TranscriptionError::Misconfigured("api_key required for Azure".to_string())
                })?;
                let api_version = settings
                    .azure_api_version
                    .as_deref()
                    .unwrap_or(DEFAULT_AZURE_API_VERSION);
                let engine = AzureWhisperEngine::new(endpoint, deployment, key, api_version);
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::None => Ok(Arc::new(DisabledTranscriptionEngine)),
        }
    }

    pub fn create_converter(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn AudioConverter>, ConversionError> {
        match settings.converter {
            AudioConverterSetting::Symphonia => Ok(Arc::new(SymphoniaAudioConverter)),
            AudioConverterSetting::Ffmpeg => {
                let converter = FfmpegAudioConverter::new(
                    settings.ffmpeg_binary.clone(),
                    PathBuf::from(&settings.scratch_dir),
                )?;
                Ok(Arc::new(converter))
            }
        }
    }
}
