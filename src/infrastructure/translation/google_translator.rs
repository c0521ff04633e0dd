use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LanguageCode;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";
const MAX_TEXT_CHARS: usize = 5000;

/// Client for the public Google Translate `translate_a/single` endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let chars = text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(TranslationError::TextTooLong(chars));
        }

        let url = format!("{}/translate_a/single", self.base_url);

        tracing::debug!(source = %source, target = %target, chars, "Requesting translation");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source.as_str()),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(format!("request: {}", e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::TOO_MANY_REQUESTS => return Err(TranslationError::RateLimited),
            // a 400 may be a bad `tl` or an over-long query; the body tells them apart
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(TranslationError::RequestFailed(format!(
                    "status {}: {}",
                    status, body
                )));
            }
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("parse response: {}", e)))?;

        let translated = extract_translation(&body)?;

        tracing::info!(target = %target, chars = translated.len(), "Translation completed");

        Ok(translated)
    }
}

/// The first element is a list of `[translated, original, ...]` segments.
fn extract_translation(body: &Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::InvalidResponse("missing segments".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::InvalidResponse(
            "empty translation".to_string(),
        ));
    }

    Ok(translated)
}
