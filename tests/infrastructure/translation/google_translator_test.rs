use std::collections::HashMap;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use cow_breed_api::application::ports::{TranslationError, Translator};
use cow_breed_api::domain::LanguageCode;
use cow_breed_api::infrastructure::translation::{GoogleTranslator, IdentityTranslator};

async fn start_mock_translate_server(status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/translate_a/single",
        get(move |Query(params): Query<HashMap<String, String>>| async move {
            let status = StatusCode::from_u16(status).unwrap();
            let text = params.get("q").cloned().unwrap_or_default();
            let target = params.get("tl").cloned().unwrap_or_default();
            let body = serde_json::json!([
                [[format!("<{}>", target), "", null, null, 1], [text.clone(), text, null, null, 1]],
                null,
                params.get("sl").cloned().unwrap_or_default()
            ]);
            (status, axum::Json(body)).into_response()
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
async fn given_successful_response_when_translating_then_joins_segments() {
    let (base_url, shutdown_tx) = start_mock_translate_server(200).await;
    let translator = GoogleTranslator::new(Some(base_url));

    let result = translator
        .translate("The Gir breed", &LanguageCode::new("en"), &LanguageCode::new("hi"))
        .await;

    assert_eq!(result.unwrap(), "<hi>The Gir breed");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limited_response_when_translating_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_translate_server(429).await;
    let translator = GoogleTranslator::new(Some(base_url));

    let result = translator
        .translate("text", &LanguageCode::new("en"), &LanguageCode::new("hi"))
        .await;

    assert!(matches!(result, Err(TranslationError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_bad_request_response_when_translating_then_keeps_status_and_body() {
    let (base_url, shutdown_tx) = start_mock_translate_server(400).await;
    let translator = GoogleTranslator::new(Some(base_url));

    let result = translator
        .translate("text", &LanguageCode::new("en"), &LanguageCode::new("xx"))
        .await;

    match result {
        Err(TranslationError::RequestFailed(message)) => {
            assert!(message.starts_with("status 400"), "got {}", message);
            assert!(message.contains("<xx>"), "got {}", message);
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_translating_then_returns_request_failed() {
    let (base_url, shutdown_tx) = start_mock_translate_server(503).await;
    let translator = GoogleTranslator::new(Some(base_url));

    let result = translator
        .translate("text", &LanguageCode::new("en"), &LanguageCode::new("hi"))
        .await;

    assert!(matches!(result, Err(TranslationError::RequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_translating_then_returns_request_failed() {
    let translator = GoogleTranslator::new(Some("http://127.0.0.1:9".to_string()));

    let result = translator
        .translate("text", &LanguageCode::new("en"), &LanguageCode::new("hi"))
        .await;

    assert!(matches!(result, Err(TranslationError::RequestFailed(_))));
}

#[tokio::test]
async fn given_oversized_text_when_translating_then_rejects_without_request() {
    let translator = GoogleTranslator::new(Some("http://127.0.0.1:9".to_string()));
    let text = "a".repeat(5001);

    let result = translator
        .translate(&text, &LanguageCode::new("en"), &LanguageCode::new("hi"))
        .await;

    assert!(matches!(result, Err(TranslationError::TextTooLong(5001))));
}

#[tokio::test]
async fn given_identity_translator_when_translating_then_returns_input() {
    let result = IdentityTranslator
        .translate("same", &LanguageCode::new("en"), &LanguageCode::new("hi"))
        .await;

    assert_eq!(result.unwrap(), "same");
}
