use crate::domain::{BreedCatalog, BreedId, BreedRecord, CatalogError};

type SeedRow = (&'static str, &'static str, &'static str, &'static str);

const STANDARD_BREEDS: [SeedRow; 5] = [
    (
        "gir",
        "Gujarat",
        "10-15 liters per day",
        "It has a high milk yield and is resistant to heat.",
    ),
    (
        "sahiwal",
        "Punjab",
        "8-12 liters per day",
        "This breed is known for its drought resistance and disease resistance.",
    ),
    (
        "red sindhi",
        "Sindh",
        "10-12 liters per day",
        "It adapts well to hot climates and has good fertility.",
    ),
    (
        "tharparkar",
        "Rajasthan",
        "10-14 liters per day",
        "This breed is a good milker and is both heat and drought resistant.",
    ),
    (
        "ongole",
        "Andhra Pradesh",
        "8-12 liters per day",
        "It has a strong build and is resistant to diseases.",
    ),
];

const ADDITIONAL_BREEDS: [SeedRow; 10] = [
    (
        "kankrej",
        "Gujarat",
        "6-10 liters per day",
        "It is a dual-purpose breed known for its powerful build and steady gait.",
    ),
    (
        "hariana",
        "Haryana",
        "5-8 liters per day",
        "It is valued both as a draught animal and as a dependable milker.",
    ),
    (
        "rathi",
        "Rajasthan",
        "6-10 liters per day",
        "It thrives in arid regions and has a docile temperament.",
    ),
    (
        "deoni",
        "Maharashtra",
        "3-5 liters per day",
        "It is hardy, tolerates drought and is used for both milk and farm work.",
    ),
    (
        "kangayam",
        "Tamil Nadu",
        "2-4 liters per day",
        "It is a strong draught breed that works well under harsh dry conditions.",
    ),
    (
        "hallikar",
        "Karnataka",
        "2-3 liters per day",
        "It is a renowned draught breed known for endurance and speed.",
    ),
    (
        "amrit mahal",
        "Karnataka",
        "1-3 liters per day",
        "It was bred for haulage and is famous for its stamina.",
    ),
    (
        "khillari",
        "Maharashtra",
        "1-3 liters per day",
        "It is a fast and powerful draught breed suited to dry farming.",
    ),
    (
        "vechur",
        "Kerala",
        "2-3 liters per day",
        "It is one of the smallest cattle breeds and its milk is rich in fat.",
    ),
    (
        "punganur",
        "Andhra Pradesh",
        "3-5 liters per day",
        "It is a dwarf breed that needs little feed and gives milk high in fat.",
    ),
];

/// The five breeds the service has always answered about.
pub fn standard_catalog() -> Result<BreedCatalog, CatalogError> {
    BreedCatalog::from_records(to_records(STANDARD_BREEDS.iter()))
}

/// Standard breeds first, then ten more regional breeds.
pub fn extended_catalog() -> Result<BreedCatalog, CatalogError> {
    let rows = STANDARD_BREEDS.iter().chain(ADDITIONAL_BREEDS.iter());
    BreedCatalog::from_records(to_records(rows))
}

fn to_records<'a>(rows: impl Iterator<Item = &'a SeedRow>) -> Vec<BreedRecord> {
    rows.filter_map(|&(id, origin, milk_yield, features)| {
        BreedId::new(id).map(|id| BreedRecord::new(id, origin, milk_yield, features))
    })
    .collect()
}
