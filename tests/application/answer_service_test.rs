use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cow_breed_api::application::ports::{TranslationError, Translator};
use cow_breed_api::application::services::{
    AnswerKind, AnswerService, COMPARISON_HEADER, INSUFFICIENT_FOR_COMPARISON_MESSAGE,
    NOT_FOUND_MESSAGE, format_single,
};
use cow_breed_api::domain::{BreedId, LanguageCode, Query};
use cow_breed_api::infrastructure::catalog::standard_catalog;

struct TaggingTranslator {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl Translator for TaggingTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("[{}] {}", target, text))
    }
}

struct FailingTranslator;

#[async_trait::async_trait]
impl Translator for FailingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source: &LanguageCode,
        _target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::RateLimited)
    }
}

fn service_with(translator: Arc<dyn Translator>) -> AnswerService {
    AnswerService::new(
        Arc::new(standard_catalog().unwrap()),
        translator,
        LanguageCode::new("en"),
    )
}

fn tagging() -> Arc<TaggingTranslator> {
    Arc::new(TaggingTranslator {
        calls: AtomicUsize::new(0),
    })
}

#[tokio::test]
async fn given_gir_question_when_asking_in_english_then_answer_starts_with_origin_sentence() {
    let translator = tagging();
    let service = service_with(translator.clone());

    let answer = service.ask(&Query::new("Tell me about Gir cows", "en")).await;

    assert!(
        answer
            .text
            .starts_with("The Gir breed originates from Gujarat.")
    );
    assert_eq!(answer.kind, AnswerKind::Single(BreedId::new("gir").unwrap()));
    assert!(!answer.translated);
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_unknown_breed_when_asking_then_returns_not_found_message() {
    let service = service_with(tagging());

    let answer = service.ask(&Query::new("tell me about yak", "en")).await;

    assert_eq!(answer.text, NOT_FOUND_MESSAGE);
    assert_eq!(answer.kind, AnswerKind::NotFound);
}

#[tokio::test]
async fn given_unknown_breed_when_asking_in_hindi_then_not_found_is_not_translated() {
    let translator = tagging();
    let service = service_with(translator.clone());

    let answer = service.ask(&Query::new("tell me about yak", "hi")).await;

    assert_eq!(answer.text, NOT_FOUND_MESSAGE);
    assert_eq!(answer.language, LanguageCode::new("en"));
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_comparison_question_when_asking_then_routes_to_comparison() {
    let service = service_with(tagging());

    let answer = service.ask(&Query::new("compare gir and sahiwal", "en")).await;

    assert!(
        answer
            .text
            .starts_with("Here's a comparison of the mentioned breeds:")
    );
    assert!(answer.text.contains("The Gir breed"));
    assert!(answer.text.contains("The Sahiwal breed"));
    assert_eq!(
        answer.kind,
        AnswerKind::Comparison(vec![
            BreedId::new("gir").unwrap(),
            BreedId::new("sahiwal").unwrap()
        ])
    );
}

#[tokio::test]
async fn given_keyword_with_single_breed_when_asking_then_returns_insufficient_message() {
    let service = service_with(tagging());

    let answer = service.ask(&Query::new("gir vs what?", "en")).await;

    assert_eq!(answer.text, INSUFFICIENT_FOR_COMPARISON_MESSAGE);
    assert_eq!(answer.kind, AnswerKind::InsufficientForComparison);
}

#[tokio::test]
async fn given_two_breeds_without_keyword_when_asking_then_compares_in_catalog_order() {
    let service = service_with(tagging());

    let answer = service
        .ask(&Query::new("tell me about ongole and gir", "en"))
        .await;

    let gir_at = answer.text.find("The Gir breed").unwrap();
    let ongole_at = answer.text.find("The Ongole breed").unwrap();
    assert!(gir_at < ongole_at);
}

#[tokio::test]
async fn given_gir_and_sahiwal_when_comparing_then_blocks_follow_catalog_order() {
    let catalog = standard_catalog().unwrap();
    let service = service_with(tagging());

    let answer = service
        .compare(&Query::new("sahiwal and gir please", "en"))
        .await;

    let expected = format!(
        "{}\n\n{}\n\n{}\n\n",
        COMPARISON_HEADER,
        format_single(catalog.lookup("gir").unwrap()),
        format_single(catalog.lookup("sahiwal").unwrap())
    );
    assert_eq!(answer.text, expected);
}

#[tokio::test]
async fn given_single_breed_when_comparing_then_returns_insufficient_message() {
    let service = service_with(tagging());

    let answer = service.compare(&Query::new("just gir", "en")).await;

    assert_eq!(answer.text, INSUFFICIENT_FOR_COMPARISON_MESSAGE);
}

#[tokio::test]
async fn given_other_language_when_asking_then_answer_is_translated() {
    let translator = tagging();
    let service = service_with(translator.clone());

    let answer = service.ask(&Query::new("tell me about sahiwal", "HI")).await;

    assert!(answer.text.starts_with("[hi] The Sahiwal breed"));
    assert!(answer.translated);
    assert_eq!(answer.language, LanguageCode::new("hi"));
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_failing_translator_when_asking_then_returns_untranslated_text_exactly() {
    let catalog = standard_catalog().unwrap();
    let service = service_with(Arc::new(FailingTranslator));

    let answer = service.ask(&Query::new("tell me about ongole", "ta")).await;

    assert_eq!(answer.text, format_single(catalog.lookup("ongole").unwrap()));
    assert!(!answer.translated);
    assert_eq!(answer.language, LanguageCode::new("en"));
}

#[tokio::test]
async fn given_failing_translator_when_comparing_then_returns_english_comparison() {
    let service = service_with(Arc::new(FailingTranslator));

    let answer = service
        .compare(&Query::new("gir vs tharparkar", "fr"))
        .await;

    assert!(answer.text.starts_with(COMPARISON_HEADER));
    assert!(!answer.translated);
}
