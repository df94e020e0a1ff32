use super::normalize::normalize;

/// Punctuation that splits a field into tokens, in addition to whitespace.
pub const PRIMARY_DELIMITERS: &[char] = &[
    '.', ',', '-', '_', '@', '+', '(', ')', '[', ']', '{', '}', '|', '\\', '/', ':', ';', '!',
    '?', '#', '$', '%', '^', '&', '*', '=',
];

/// Characters that split a token into sub-tokens (dotted, hyphenated and
/// underscored identifiers).
pub const SECONDARY_DELIMITERS: &[char] = &['.', '-', '_'];

/// Check whether a character is a primary token delimiter
#[inline]
pub fn is_primary_delimiter(ch: char) -> bool {
    ch.is_whitespace() || PRIMARY_DELIMITERS.contains(&ch)
}

/// Check whether a character is a sub-token delimiter
#[inline]
pub fn is_secondary_delimiter(ch: char) -> bool {
    SECONDARY_DELIMITERS.contains(&ch)
}

/// Split a field value into normalized tokens.
///
/// The text is first split on whitespace and the primary delimiter set. Any
/// token that still contains `.`, `-` or `_` is split again on those three
/// characters and its non-empty parts are kept alongside it.
///
/// The result may contain duplicates; deduplication is left to the caller
/// that merges tokens from several sources.
pub fn tokenize(text: &str) -> Vec<String> {
    let Some(normalized) = normalize(text) else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    for part in normalized.split(is_primary_delimiter) {
        let Some(token) = normalize(part) else {
            continue;
        };

        let sub_tokens: Vec<String> = if token.contains(is_secondary_delimiter) {
            token.split(is_secondary_delimiter).filter_map(normalize).collect()
        } else {
            Vec::new()
        };
        tokens.push(token);
        tokens.extend(sub_tokens);
    }

    tokens
}
