use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AudioKey;

/// Content-addressed store for synthesized clips.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn contains(&self, key: &AudioKey) -> Result<bool, AudioStoreError>;

    async fn put(&self, key: &AudioKey, audio: Bytes) -> Result<(), AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
