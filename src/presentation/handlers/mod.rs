mod ask;
mod compare;
mod health;
mod speech_to_text;
mod text_to_speech;
pub mod types;

pub use ask::ask_handler;
pub use compare::compare_handler;
pub use health::health_handler;
pub use speech_to_text::speech_to_text_handler;
pub use text_to_speech::text_to_speech_handler;
