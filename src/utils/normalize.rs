/// Normalize text for indexing: trim surrounding whitespace and lower-case.
///
/// Returns `None` when nothing is left after trimming. Callers treat `None`
/// as an absent value and skip it, so empty strings never reach an index.
pub fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Normalize an optional field value. Absent fields stay absent.
pub fn normalize_field(value: Option<&str>) -> Option<String> {
    value.and_then(normalize)
}
