use std::collections::HashMap;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use cow_breed_api::application::ports::{SpeechSynthesizer, SynthesisError};
use cow_breed_api::domain::LanguageCode;
use cow_breed_api::infrastructure::speech::{
    DisabledSpeechSynthesizer, GoogleTtsSynthesizer, split_into_pieces,
};

async fn start_mock_tts_server(status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/translate_tts",
        get(move |Query(params): Query<HashMap<String, String>>| async move {
            let status = StatusCode::from_u16(status).unwrap();
            let idx = params.get("idx").cloned().unwrap_or_default();
            let lang = params.get("tl").cloned().unwrap_or_default();
            (status, format!("[{}:{}]", lang, idx)).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (format!("http://{}", addr), shutdown_tx)
}

#[tokio::test]
async fn given_short_text_when_synthesizing_then_returns_single_piece_audio() {
    let (base_url, shutdown_tx) = start_mock_tts_server(200).await;
    let synthesizer = GoogleTtsSynthesizer::new(Some(base_url));

    let audio = synthesizer
        .synthesize("The Gir breed", &LanguageCode::new("hi"))
        .await
        .unwrap();

    assert_eq!(&audio[..], b"[hi:0]");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_long_text_when_synthesizing_then_concatenates_pieces_in_order() {
    let (base_url, shutdown_tx) = start_mock_tts_server(200).await;
    let synthesizer = GoogleTtsSynthesizer::new(Some(base_url));
    let text = "word ".repeat(50);

    let audio = synthesizer
        .synthesize(&text, &LanguageCode::new("en"))
        .await
        .unwrap();

    assert_eq!(&audio[..], b"[en:0][en:1][en:2]");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_not_found_response_when_synthesizing_then_returns_unsupported_language() {
    let (base_url, shutdown_tx) = start_mock_tts_server(404).await;
    let synthesizer = GoogleTtsSynthesizer::new(Some(base_url));

    let result = synthesizer
        .synthesize("hello", &LanguageCode::new("zz"))
        .await;

    assert!(matches!(result, Err(SynthesisError::UnsupportedLanguage(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_synthesizing_then_returns_request_failed() {
    let (base_url, shutdown_tx) = start_mock_tts_server(500).await;
    let synthesizer = GoogleTtsSynthesizer::new(Some(base_url));

    let result = synthesizer.synthesize("hello", &LanguageCode::new("en")).await;

    assert!(matches!(result, Err(SynthesisError::RequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_whitespace_text_when_synthesizing_then_returns_empty_text() {
    let synthesizer = GoogleTtsSynthesizer::new(Some("http://127.0.0.1:9".to_string()));

    let result = synthesizer.synthesize("  \n ", &LanguageCode::new("en")).await;

    assert!(matches!(result, Err(SynthesisError::EmptyText)));
}

#[tokio::test]
async fn given_disabled_synthesizer_when_synthesizing_then_returns_disabled() {
    let result = DisabledSpeechSynthesizer
        .synthesize("hello", &LanguageCode::new("en"))
        .await;

    assert!(matches!(result, Err(SynthesisError::Disabled)));
}

#[test]
fn given_words_when_splitting_then_pieces_respect_limit_and_keep_words() {
    let text = "The Sahiwal breed originates from Punjab. It produces around 8-12 liters per day.";

    let pieces = split_into_pieces(text, 20);

    assert!(pieces.iter().all(|p| p.chars().count() <= 20));
    assert_eq!(pieces.join(" "), text);
}

#[test]
fn given_overlong_word_when_splitting_then_word_is_cut_on_char_boundaries() {
    let word = "गाय".repeat(10);

    let pieces = split_into_pieces(&word, 7);

    assert!(pieces.iter().all(|p| p.chars().count() <= 7));
    assert_eq!(pieces.concat(), word);
}

#[test]
fn given_blank_text_when_splitting_then_returns_no_pieces() {
    assert!(split_into_pieces(" \t\n", 100).is_empty());
}
