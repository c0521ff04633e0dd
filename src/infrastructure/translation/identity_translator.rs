use async_trait::async_trait;

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LanguageCode;

/// Used when translation is switched off; answers stay in the source language.
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &LanguageCode,
        _target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}
