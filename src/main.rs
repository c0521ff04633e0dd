use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use cow_breed_api::application::services::{AnswerService, SpeechService, TranscriptionService};
use cow_breed_api::domain::LanguageCode;
use cow_breed_api::infrastructure::audio::{FfmpegAudioConverter, TranscriptionEngineFactory};
use cow_breed_api::infrastructure::catalog::CatalogFactory;
use cow_breed_api::infrastructure::observability::{TracingConfig, init_tracing};
use cow_breed_api::infrastructure::speech::SynthesizerFactory;
use cow_breed_api::infrastructure::storage::LocalAudioStore;
use cow_breed_api::infrastructure::translation::TranslatorFactory;
use cow_breed_api::presentation::config::AudioConverterSetting;
use cow_breed_api::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let catalog = CatalogFactory::create(&settings.catalog).context("Failed to load catalog")?;

    let translator = TranslatorFactory::create(&settings.translation);
    let answer_service = Arc::new(AnswerService::new(
        Arc::clone(&catalog),
        translator,
        LanguageCode::new(&settings.translation.source_language),
    ));

    let audio_store = Arc::new(
        LocalAudioStore::new(PathBuf::from(&settings.speech.audio_dir))
            .context("Failed to prepare audio directory")?,
    );
    let speech_service = Arc::new(SpeechService::new(
        SynthesizerFactory::create(&settings.speech),
        audio_store,
    ));

    if settings.transcription.converter == AudioConverterSetting::Ffmpeg {
        let probe = FfmpegAudioConverter::new(
            settings.transcription.ffmpeg_binary.clone(),
            PathBuf::from(&settings.transcription.scratch_dir),
        )?;
        if let Err(e) = probe.check_binary().await {
            tracing::warn!(error = %e, "ffmpeg unavailable, speech-to-text will report errors");
        }
    }

    let transcription_service = Arc::new(TranscriptionService::new(
        TranscriptionEngineFactory::create_converter(&settings.transcription)?,
        TranscriptionEngineFactory::create(&settings.transcription)?,
        settings.transcription.max_upload_bytes(),
    ));

    tracing::info!(
        translation = ?settings.translation.provider,
        speech = ?settings.speech.provider,
        transcription = ?settings.transcription.provider,
        "Adapters configured"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        catalog,
        answer_service,
        speech_service,
        transcription_service,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
