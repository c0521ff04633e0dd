use std::collections::HashMap;

use super::breed::{BreedId, BreedRecord};

/// Read-only breed table. Iteration order is the order records were supplied in.
#[derive(Debug, Clone)]
pub struct BreedCatalog {
    records: Vec<BreedRecord>,
    index: HashMap<BreedId, usize>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no breeds")]
    Empty,
    #[error("duplicate breed identifier: {0}")]
    DuplicateBreed(String),
    #[error("invalid breed identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("catalog source unreadable: {0}")]
    Unreadable(String),
}

impl BreedCatalog {
    pub fn from_records(records: Vec<BreedRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateBreed(record.id.to_string()));
            }
        }

        Ok(Self { records, index })
    }

    pub fn lookup(&self, identifier: &str) -> Option<&BreedRecord> {
        let id = BreedId::new(identifier)?;
        self.index.get(&id).map(|&position| &self.records[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreedRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
