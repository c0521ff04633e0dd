const MAX_VISIBLE_CHARS: usize = 100;

/// Renders free user text for a single log line.
///
/// Whitespace runs (including newlines) collapse to one space and long text is
/// cut on a char boundary, so Devanagari or Tamil questions never split a
/// code point.
pub fn sanitize_for_log(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = collapsed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return collapsed;
    }

    let visible: String = collapsed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", visible, total)
}
