use std::sync::Arc;

use crate::application::ports::Translator;
use crate::domain::{BreedCatalog, BreedId, LanguageCode, MatchSet, Query};

use super::answer_formatter::{
    format_comparison, format_insufficient_for_comparison, format_not_found, format_single,
};
use super::breed_matcher::{BreedMatcher, Intent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKind {
    Single(BreedId),
    Comparison(Vec<BreedId>),
    NotFound,
    InsufficientForComparison,
}

/// `language` is the language `text` is actually written in, which is the
/// source language whenever translation was skipped or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub kind: AnswerKind,
    pub language: LanguageCode,
    pub translated: bool,
}

/// Routes a question to a single-breed answer or a comparison and localizes the result.
pub struct AnswerService {
    catalog: Arc<BreedCatalog>,
    matcher: BreedMatcher,
    translator: Arc<dyn Translator>,
    source_language: LanguageCode,
}

impl AnswerService {
    pub fn new(
        catalog: Arc<BreedCatalog>,
        translator: Arc<dyn Translator>,
        source_language: LanguageCode,
    ) -> Self {
        Self {
            matcher: BreedMatcher::new(Arc::clone(&catalog)),
            catalog,
            translator,
            source_language,
        }
    }

    pub async fn ask(&self, query: &Query) -> Answer {
        let (intent, matches) = self.matcher.classify(&query.question);

        if intent == Intent::Comparison {
            tracing::debug!(matched = matches.len(), "Question routed to comparison");
            return self.compare_matches(matches, &query.language).await;
        }

        // first match in catalog order wins
        let Some(record) = matches.first().and_then(|id| self.catalog.lookup(id.as_str())) else {
            tracing::debug!("No breed matched question");
            return self.untranslated(format_not_found(), AnswerKind::NotFound);
        };

        let english = format_single(record);
        self.localize(english, AnswerKind::Single(record.id.clone()), &query.language)
            .await
    }

    pub async fn compare(&self, query: &Query) -> Answer {
        let matches = self.matcher.find_breeds(&query.question);
        self.compare_matches(matches, &query.language).await
    }

    async fn compare_matches(&self, matches: MatchSet, language: &LanguageCode) -> Answer {
        if matches.len() < 2 {
            return self.untranslated(
                format_insufficient_for_comparison(),
                AnswerKind::InsufficientForComparison,
            );
        }

        let records = matches
            .iter()
            .filter_map(|id| self.catalog.lookup(id.as_str()));
        let english = format_comparison(records);
        self.localize(english, AnswerKind::Comparison(matches.into_vec()), language)
            .await
    }

    fn untranslated(&self, text: String, kind: AnswerKind) -> Answer {
        Answer {
            text,
            kind,
            language: self.source_language.clone(),
            translated: false,
        }
    }

    /// Translation failures fall back to the source text.
    async fn localize(&self, text: String, kind: AnswerKind, target: &LanguageCode) -> Answer {
        if *target == self.source_language {
            return self.untranslated(text, kind);
        }

        match self
            .translator
            .translate(&text, &self.source_language, target)
            .await
        {
            Ok(translated) => Answer {
                text: translated,
                kind,
                language: target.clone(),
                translated: true,
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    target = %target,
                    "Translation failed, answering in source language"
                );
                self.untranslated(text, kind)
            }
        }
    }
}
