mod in_memory_audio_store;
mod local_audio_store;

pub use in_memory_audio_store::InMemoryAudioStore;
pub use local_audio_store::LocalAudioStore;
