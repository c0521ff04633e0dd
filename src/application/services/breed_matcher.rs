use std::sync::Arc;

use crate::domain::{BreedCatalog, MatchSet};

pub const COMPARISON_KEYWORDS: [&str; 4] = ["compare", "difference between", "vs", "versus"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Single,
    Comparison,
}

/// Plain substring matcher over the catalog identifiers.
///
/// Identifiers are tested in catalog order, so a match set never reflects where
/// a breed appears in the question. Overlapping identifiers both match.
pub struct BreedMatcher {
    catalog: Arc<BreedCatalog>,
}

impl BreedMatcher {
    pub fn new(catalog: Arc<BreedCatalog>) -> Self {
        Self { catalog }
    }

    pub fn find_breeds(&self, text: &str) -> MatchSet {
        let lowered = text.to_lowercase();
        let ids = self
            .catalog
            .iter()
            .filter(|record| lowered.contains(record.id.as_str()))
            .map(|record| record.id.clone())
            .collect();
        MatchSet::from_catalog_order(ids)
    }

    pub fn is_comparison_intent(&self, text: &str) -> bool {
        let (intent, _) = self.classify(text);
        intent == Intent::Comparison
    }

    /// Scans once and returns both the intent and the matches it was based on.
    pub fn classify(&self, text: &str) -> (Intent, MatchSet) {
        let matches = self.find_breeds(text);
        let intent = if has_comparison_keyword(text) || matches.len() > 1 {
            Intent::Comparison
        } else {
            Intent::Single
        };
        (intent, matches)
    }
}

fn has_comparison_keyword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    COMPARISON_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
