use super::breed::BreedId;

/// Breed identifiers found in a question, in catalog order.
///
/// Only the breed matcher builds one, so every member is a catalog key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet(Vec<BreedId>);

impl MatchSet {
    pub(crate) fn from_catalog_order(ids: Vec<BreedId>) -> Self {
        Self(ids)
    }

    pub fn first(&self) -> Option<&BreedId> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreedId> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<BreedId> {
        self.0
    }
}
