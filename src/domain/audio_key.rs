use std::fmt;

use sha2::{Digest, Sha256};

use super::language::LanguageCode;

const AUDIO_EXTENSION: &str = "mp3";

/// Content address of a synthesized clip: SHA-256 over `language \0 text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioKey(String);

impl AudioKey {
    pub fn derive(text: &str, language: &LanguageCode) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(language.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update(text.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, AUDIO_EXTENSION)
    }
}

impl fmt::Display for AudioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
