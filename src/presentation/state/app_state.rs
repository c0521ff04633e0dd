use std::sync::Arc;

use crate::application::services::{AnswerService, SpeechService, TranscriptionService};
use crate::domain::BreedCatalog;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<BreedCatalog>,
    pub answer_service: Arc<AnswerService>,
    pub speech_service: Arc<SpeechService>,
    pub transcription_service: Arc<TranscriptionService>,
    pub settings: Arc<Settings>,
}
