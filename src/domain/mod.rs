mod audio_key;
mod breed;
mod breed_catalog;
mod language;
mod match_set;
mod query;

pub use audio_key::AudioKey;
pub use breed::{BreedId, BreedRecord};
pub use breed_catalog::{BreedCatalog, CatalogError};
pub use language::LanguageCode;
pub use match_set::MatchSet;
pub use query::Query;
