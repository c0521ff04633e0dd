use std::sync::Arc;

use crate::application::ports::SpeechSynthesizer;
use crate::presentation::config::{SpeechProviderSetting, SpeechSettings};

use super::disabled_speech_synthesizer::DisabledSpeechSynthesizer;
use super::google_tts_synthesizer::GoogleTtsSynthesizer;

pub struct SynthesizerFactory;

impl SynthesizerFactory {
    pub fn create(settings: &SpeechSettings) -> Arc<dyn SpeechSynthesizer> {
        match settings.provider {
            SpeechProviderSetting::Google => {
                Arc::new(GoogleTtsSynthesizer::new(settings.base_url.clone()))
            }
            SpeechProviderSetting::None => Arc::new(DisabledSpeechSynthesizer),
        }
    }
}
