mod disabled_speech_synthesizer;
mod google_tts_synthesizer;
mod mock_speech_synthesizer;
mod synthesizer_factory;

pub use disabled_speech_synthesizer::DisabledSpeechSynthesizer;
pub use google_tts_synthesizer::{GoogleTtsSynthesizer, split_into_pieces};
pub use mock_speech_synthesizer::MockSpeechSynthesizer;
pub use synthesizer_factory::SynthesizerFactory;
