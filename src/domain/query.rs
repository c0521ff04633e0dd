use super::language::LanguageCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub question: String,
    pub language: LanguageCode,
}

impl Query {
    pub fn new(question: &str, language: &str) -> Self {
        Self {
            question: question.to_lowercase(),
            language: LanguageCode::new(language),
        }
    }
}
