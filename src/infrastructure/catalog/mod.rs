mod catalog_factory;
mod json_catalog_loader;
mod seed_tables;

pub use catalog_factory::CatalogFactory;
pub use json_catalog_loader::{load_catalog_file, parse_catalog};
pub use seed_tables::{extended_catalog, standard_catalog};
