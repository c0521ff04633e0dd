mod audio_converter;
mod audio_store;
mod speech_synthesizer;
mod transcription_engine;
mod translator;

pub use audio_converter::{AudioConverter, ConversionError};
pub use audio_store::{AudioStore, AudioStoreError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translator::{TranslationError, Translator};
