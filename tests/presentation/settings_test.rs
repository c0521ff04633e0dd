use cow_breed_api::presentation::config::{
    AudioConverterSetting, CatalogSeed, Environment, Settings, SpeechProviderSetting,
    TranscriptionProviderSetting, TranslationProviderSetting,
};
use tempfile::TempDir;

#[test]
fn given_no_settings_file_when_loading_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.catalog.seed, CatalogSeed::Standard);
    assert!(settings.catalog.path.is_none());
    assert_eq!(settings.translation.provider, TranslationProviderSetting::Google);
    assert_eq!(settings.translation.source_language, "en");
    assert_eq!(settings.speech.provider, SpeechProviderSetting::Google);
    assert!(!settings.speech.synthesize_answers);
    assert_eq!(settings.transcription.provider, TranscriptionProviderSetting::None);
    assert_eq!(settings.transcription.converter, AudioConverterSetting::Symphonia);
    assert_eq!(settings.transcription.max_upload_size_mb, 25);
}

#[test]
fn given_environment_file_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.test.toml"),
        r#"
[server]
port = 8088
public_base_url = "https://cows.example.org/"

[catalog]
seed = "extended"

[translation]
provider = "none"

[speech]
synthesize_answers = true

[transcription]
provider = "openai"
converter = "ffmpeg"
api_key = "sk-test"
max_upload_size_mb = 2
"#,
    )
    .unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.catalog.seed, CatalogSeed::Extended);
    assert_eq!(settings.translation.provider, TranslationProviderSetting::None);
    assert!(settings.speech.synthesize_answers);
    assert_eq!(settings.transcription.provider, TranscriptionProviderSetting::OpenAi);
    assert_eq!(settings.transcription.converter, AudioConverterSetting::Ffmpeg);
    assert_eq!(settings.transcription.api_key.as_deref(), Some("sk-test"));
    assert_eq!(settings.transcription.max_upload_bytes(), 2 * 1024 * 1024);
}

#[test]
fn given_file_for_other_environment_when_loading_then_ignores_it() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.prod.toml"),
        "[catalog]\nseed = \"extended\"\n",
    )
    .unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.catalog.seed, CatalogSeed::Standard);
}

#[test]
fn given_unknown_provider_when_loading_then_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.test.toml"),
        "[translation]\nprovider = \"babelfish\"\n",
    )
    .unwrap();

    assert!(Settings::load_from(dir.path(), Environment::Test).is_err());
}

#[test]
fn given_base_url_with_trailing_slash_when_building_audio_url_then_joins_cleanly() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("appsettings.local.toml"),
        "[server]\npublic_base_url = \"https://cows.example.org/\"\n",
    )
    .unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Local).unwrap();

    assert_eq!(
        settings.public_audio_url("abc.mp3"),
        "https://cows.example.org/audio/abc.mp3"
    );
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values() {
    assert_eq!(
        Environment::try_from("local".to_string()).unwrap(),
        Environment::Local
    );
    assert_eq!(
        Environment::try_from(" TEST ".to_string()).unwrap(),
        Environment::Test
    );
    assert_eq!(
        Environment::try_from("production".to_string()).unwrap(),
        Environment::Prod
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_displayed_then_matches_file_suffix() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::Local.as_str(), "local");
}
