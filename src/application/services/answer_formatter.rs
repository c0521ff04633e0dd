use crate::domain::BreedRecord;

pub const NOT_FOUND_MESSAGE: &str = "Sorry, I don't have information on that breed.";
pub const INSUFFICIENT_FOR_COMPARISON_MESSAGE: &str =
    "Please mention at least two breeds for comparison.";
pub const COMPARISON_HEADER: &str = "Here's a comparison of the mentioned breeds:";

pub fn format_single(record: &BreedRecord) -> String {
    format!(
        "The {} breed originates from {}. It produces around {}. {}",
        record.id.display_name(),
        record.origin,
        record.milk_yield,
        record.features
    )
}

/// Header, blank line, then one block per record each followed by a blank line.
pub fn format_comparison<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a BreedRecord>,
{
    let mut text = format!("{}\n\n", COMPARISON_HEADER);
    for record in records {
        text.push_str(&format_single(record));
        text.push_str("\n\n");
    }
    text
}

pub fn format_not_found() -> String {
    NOT_FOUND_MESSAGE.to_string()
}

pub fn format_insufficient_for_comparison() -> String {
    INSUFFICIENT_FOR_COMPARISON_MESSAGE.to_string()
}
