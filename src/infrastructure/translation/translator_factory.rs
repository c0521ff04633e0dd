use std::sync::Arc;

use crate::application::ports::Translator;
use crate::presentation::config::{TranslationProviderSetting, TranslationSettings};

use super::google_translator::GoogleTranslator;
use super::identity_translator::IdentityTranslator;

pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create(settings: &TranslationSettings) -> Arc<dyn Translator> {
        match settings.provider {
            TranslationProviderSetting::Google => {
                Arc::new(GoogleTranslator::new(settings.base_url.clone()))
            }
            TranslationProviderSetting::None => Arc::new(IdentityTranslator),
        }
    }
}
