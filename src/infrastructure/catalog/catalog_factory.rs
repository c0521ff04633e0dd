use std::path::Path;
use std::sync::Arc;

use crate::domain::{BreedCatalog, CatalogError};
use crate::presentation::config::{CatalogSeed, CatalogSettings};

use super::json_catalog_loader::load_catalog_file;
use super::seed_tables::{extended_catalog, standard_catalog};

pub struct CatalogFactory;

impl CatalogFactory {
    pub fn create(settings: &CatalogSettings) -> Result<Arc<BreedCatalog>, CatalogError> {
        let catalog = match settings.path.as_deref() {
            Some(path) => load_catalog_file(Path::new(path))?,
            None => match settings.seed {
                CatalogSeed::Standard => standard_catalog()?,
                CatalogSeed::Extended => extended_catalog()?,
            },
        };

        tracing::info!(breeds = catalog.len(), "Breed catalog loaded");
        Ok(Arc::new(catalog))
    }
}
