use std::collections::HashMap;
use std::sync::RwLock;

use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioKey;

#[derive(Default)]
pub struct InMemoryAudioStore {
    clips: RwLock<HashMap<AudioKey, Bytes>>,
}

impl InMemoryAudioStore {
    pub fn len(&self) -> usize {
        self.clips.read().map(|clips| clips.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &AudioKey) -> Option<Bytes> {
        self.clips.read().ok()?.get(key).cloned()
    }
}

fn poisoned() -> AudioStoreError {
    AudioStoreError::ReadFailed("audio store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl AudioStore for InMemoryAudioStore {
    async fn contains(&self, key: &AudioKey) -> Result<bool, AudioStoreError> {
        let clips = self.clips.read().map_err(|_| poisoned())?;
        Ok(clips.contains_key(key))
    }

    async fn put(&self, key: &AudioKey, audio: Bytes) -> Result<(), AudioStoreError> {
        let mut clips = self.clips.write().map_err(|_| poisoned())?;
        clips.insert(key.clone(), audio);
        Ok(())
    }
}
