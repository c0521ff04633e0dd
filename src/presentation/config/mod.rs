mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioConverterSetting, CatalogSeed, CatalogSettings, LoggingSettings, ServerSettings,
    Settings, SpeechProviderSetting, SpeechSettings, TranscriptionProviderSetting,
    TranscriptionSettings, TranslationProviderSetting, TranslationSettings,
};
