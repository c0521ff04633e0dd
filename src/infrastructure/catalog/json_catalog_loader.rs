use std::path::Path;

use serde::Deserialize;

use crate::domain::{BreedCatalog, BreedId, BreedRecord, CatalogError};

#[derive(Debug, Deserialize)]
struct BreedEntry {
    id: String,
    origin: String,
    milk_yield: String,
    features: String,
}

/// Reads a JSON array of `{id, origin, milk_yield, features}` objects.
pub fn load_catalog_file(path: &Path) -> Result<BreedCatalog, CatalogError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::Unreadable(format!("{}: {}", path.display(), e)))?;
    parse_catalog(&contents)
}

pub fn parse_catalog(json: &str) -> Result<BreedCatalog, CatalogError> {
    let entries: Vec<BreedEntry> =
        serde_json::from_str(json).map_err(|e| CatalogError::Unreadable(e.to_string()))?;

    let records = entries
        .into_iter()
        .map(|entry| {
            let id = BreedId::new(&entry.id)
                .ok_or_else(|| CatalogError::InvalidIdentifier(entry.id.clone()))?;
            Ok(BreedRecord::new(
                id,
                entry.origin,
                entry.milk_yield,
                entry.features,
            ))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    BreedCatalog::from_records(records)
}
