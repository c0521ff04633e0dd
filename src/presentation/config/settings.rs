use std::path::Path;

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use super::environment::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub translation: TranslationSettings,
    pub speech: SpeechSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub seed: CatalogSeed,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSeed {
    Standard,
    Extended,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub provider: TranslationProviderSetting,
    pub base_url: Option<String>,
    pub source_language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProviderSetting {
    Google,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub provider: SpeechProviderSetting,
    pub base_url: Option<String>,
    pub audio_dir: String,
    pub synthesize_answers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProviderSetting {
    Google,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub converter: AudioConverterSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
    pub max_upload_size_mb: usize,
    pub scratch_dir: String,
    pub ffmpeg_binary: String,
}

impl TranscriptionSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioConverterSetting {
    Symphonia,
    Ffmpeg,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    pub filter: Option<String>,
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml` in the working directory, then `APP_*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), environment)
    }

    pub fn load_from(config_dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let file = config_dir.join(format!("appsettings.{}.toml", environment.as_str()));

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 10000)?
            .set_default("server.public_base_url", "http://localhost:10000")?
            .set_default("catalog.seed", "standard")?
            .set_default("translation.provider", "google")?
            .set_default("translation.source_language", "en")?
            .set_default("speech.provider", "google")?
            .set_default("speech.audio_dir", "./audio")?
            .set_default("speech.synthesize_answers", false)?
            .set_default("transcription.provider", "none")?
            .set_default("transcription.converter", "symphonia")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("transcription.max_upload_size_mb", 25)?
            .set_default("transcription.scratch_dir", "./scratch")?
            .set_default("transcription.ffmpeg_binary", "ffmpeg")?
            .set_default("logging.json", false)?
            .add_source(File::new(&file.to_string_lossy(), FileFormat::Toml).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn public_audio_url(&self, file_name: &str) -> String {
        format!(
            "{}/audio/{}",
            self.server.public_base_url.trim_end_matches('/'),
            file_name
        )
    }
}
