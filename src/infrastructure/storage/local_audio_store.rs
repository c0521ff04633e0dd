use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioKey;

/// Audio files under a directory that is also served at `/audio/`.
///
/// `LocalFileSystem::put` writes to a staging file and renames it into place,
/// so two requests storing the same key never expose a half-written clip.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(root: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&root)?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

fn store_path(key: &AudioKey) -> StorePath {
    StorePath::from(key.file_name())
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
    async fn contains(&self, key: &AudioKey) -> Result<bool, AudioStoreError> {
        match self.inner.head(&store_path(key)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(AudioStoreError::ReadFailed(e.to_string())),
        }
    }

    async fn put(&self, key: &AudioKey, audio: Bytes) -> Result<(), AudioStoreError> {
        self.inner
            .put(&store_path(key), PutPayload::from(audio))
            .await
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}
