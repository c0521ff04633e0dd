use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::StatusCode;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::LanguageCode;

const DEFAULT_BASE_URL: &str = "https://translate.google.com";
const MAX_PIECE_CHARS: usize = 100;

/// Google Translate text-to-speech. Long text is spoken in pieces and the mp3
/// frames are concatenated, which players handle as one stream.
pub struct GoogleTtsSynthesizer {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsSynthesizer {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    async fn fetch_piece(
        &self,
        piece: &str,
        language: &LanguageCode,
        idx: usize,
        total: usize,
    ) -> Result<Bytes, SynthesisError> {
        let url = format!("{}/translate_tts", self.base_url);
        let total_str = total.to_string();
        let idx_str = idx.to_string();
        let len_str = piece.chars().count().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.as_str()),
                ("q", piece),
                ("total", total_str.as_str()),
                ("idx", idx_str.as_str()),
                ("textlen", len_str.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::RequestFailed(format!("request: {}", e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                return Err(SynthesisError::UnsupportedLanguage(language.to_string()));
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(SynthesisError::RequestFailed(format!(
                    "status {}: {}",
                    status, body
                )));
            }
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::RequestFailed(format!("body: {}", e)))?;

        if audio.is_empty() {
            return Err(SynthesisError::InvalidResponse("empty audio".to_string()));
        }

        Ok(audio)
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<Bytes, SynthesisError> {
        let pieces = split_into_pieces(text, MAX_PIECE_CHARS);
        if pieces.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        tracing::debug!(pieces = pieces.len(), language = %language, "Requesting speech synthesis");

        let mut audio = BytesMut::new();
        for (idx, piece) in pieces.iter().enumerate() {
            let chunk = self.fetch_piece(piece, language, idx, pieces.len()).await?;
            audio.extend_from_slice(&chunk);
        }

        Ok(audio.freeze())
    }
}

/// Greedy word packing into pieces of at most `max_chars` characters.
/// A single word longer than the limit is cut on character boundaries.
pub fn split_into_pieces(text: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word_chars: Vec<char> = word.chars().collect();

        while word_chars.len() > max_chars {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word_chars.split_off(max_chars);
            pieces.push(word_chars.into_iter().collect());
            word_chars = rest;
        }

        let word_len = word_chars.len();
        if word_len == 0 {
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word_chars);
        current_len += word_len;
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}
