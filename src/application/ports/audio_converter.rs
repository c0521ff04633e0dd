use async_trait::async_trait;

/// Re-encodes an uploaded audio container as 16 kHz mono 16-bit PCM WAV.
#[async_trait]
pub trait AudioConverter: Send + Sync {
    async fn to_wav(&self, data: &[u8]) -> Result<Vec<u8>, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("converter unavailable: {0}")]
    ConverterUnavailable(String),
    #[error("scratch file error: {0}")]
    Scratch(#[from] std::io::Error),
}
