use super::normalize::normalize;

/// Check whether a character bounds a progressive prefix.
///
/// Deliberately narrower than the tokenizer's delimiter set: `@`, `+` and
/// the other punctuation do not end a prefix.
#[inline]
pub fn is_prefix_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '-' | '_')
}

/// Expand text into its separator-bounded, left-anchored prefixes.
///
/// One prefix ends right before each separator, and the whole text comes
/// last. Text without separators yields just itself.
///
/// ```
/// use fleetdex::utils::progressive_prefixes;
///
/// assert_eq!(
///     progressive_prefixes("osk.r.pnk@gmail.com"),
///     vec!["osk", "osk.r", "osk.r.pnk@gmail", "osk.r.pnk@gmail.com"]
/// );
/// ```
pub fn progressive_prefixes(text: &str) -> Vec<String> {
    let Some(normalized) = normalize(text) else {
        return Vec::new();
    };

    // Byte offsets of each separator, always on a char boundary
    let boundaries: Vec<usize> = normalized
        .char_indices()
        .filter(|&(_, ch)| is_prefix_separator(ch))
        .map(|(idx, _)| idx)
        .collect();

    if boundaries.is_empty() {
        return vec![normalized];
    }

    let mut prefixes = Vec::with_capacity(boundaries.len() + 1);
    // A leading separator gives an empty prefix, which is dropped
    prefixes.extend(boundaries.iter().filter_map(|&end| normalize(&normalized[..end])));
    prefixes.push(normalized);
    prefixes
}
