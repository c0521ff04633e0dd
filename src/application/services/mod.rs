mod answer_formatter;
mod answer_service;
mod breed_matcher;
mod speech_service;
mod transcription_service;

pub use answer_formatter::{
    COMPARISON_HEADER, INSUFFICIENT_FOR_COMPARISON_MESSAGE, NOT_FOUND_MESSAGE, format_comparison,
    format_insufficient_for_comparison, format_not_found, format_single,
};
pub use answer_service::{Answer, AnswerKind, AnswerService};
pub use breed_matcher::{BreedMatcher, COMPARISON_KEYWORDS, Intent};
pub use speech_service::{AudioHandle, SpeechError, SpeechService};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
