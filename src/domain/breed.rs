use std::fmt;

/// Lowercase catalog key naming a cattle breed.
///
/// The same string is used as the substring pattern when scanning questions,
/// so it is always trimmed and lowercased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreedId(String);

impl BreedId {
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character upper-cased, the rest lower-cased ("red sindhi" -> "Red sindhi").
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for BreedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedRecord {
    pub id: BreedId,
    pub origin: String,
    pub milk_yield: String,
    pub features: String,
}

impl BreedRecord {
    pub fn new(
        id: BreedId,
        origin: impl Into<String>,
        milk_yield: impl Into<String>,
        features: impl Into<String>,
    ) -> Self {
        Self {
            id,
            origin: origin.into(),
            milk_yield: milk_yield.into(),
            features: features.into(),
        }
    }
}
