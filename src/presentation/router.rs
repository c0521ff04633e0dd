use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, compare_handler, health_handler, speech_to_text_handler, text_to_speech_handler,
};
use crate::presentation::state::AppState;

// multipart framing on top of the raw upload
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = state.settings.transcription.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;
    let audio_dir = ServeDir::new(&state.settings.speech.audio_dir);

    Router::new()
        .route("/health", get(health_handler))
        .route("/ask", post(ask_handler))
        .route("/compare", post(compare_handler))
        .route("/text-to-speech", post(text_to_speech_handler))
        .route(
            "/speech-to-text",
            post(speech_to_text_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .nest_service("/audio", audio_dir)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
