mod azure_whisper_engine;
mod disabled_transcription_engine;
mod ffmpeg_converter;
mod mock_transcription_engine;
mod openai_whisper_engine;
mod symphonia_converter;
mod transcription_engine_factory;
mod wav;
mod whisper_upload;

pub use azure_whisper_engine::AzureWhisperEngine;
pub use disabled_transcription_engine::DisabledTranscriptionEngine;
pub use ffmpeg_converter::FfmpegAudioConverter;
pub use mock_transcription_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use symphonia_converter::{SymphoniaAudioConverter, decode_to_mono_16k};
pub use transcription_engine_factory::TranscriptionEngineFactory;
pub use wav::{TARGET_SAMPLE_RATE, encode_wav_pcm16};
