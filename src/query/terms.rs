use ahash::AHashSet;
use tracing::debug;

use crate::utils::{normalize, progressive_prefixes};

/// Maximum number of values the store accepts in one array-membership filter
pub const MAX_QUERY_TERMS: usize = 30;

/// Ordered, capped list of terms derived from one search string.
///
/// Whole-query terms come first, then per-word terms, so truncation drops
/// the narrowest word fragments first. Truncation is silent by contract;
/// [`QueryTermSet::dropped`] reports how many terms were cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTermSet {
    terms: Vec<String>,
    dropped: usize,
}

impl QueryTermSet {
    /// Build the term set with the store's default cap
    pub fn new(query: &str) -> Self {
        Self::with_limit(query, MAX_QUERY_TERMS)
    }

    /// Build the term set with a custom cap, never above [`MAX_QUERY_TERMS`].
    /// A limit of 0 means the default cap.
    pub fn with_limit(query: &str, limit: usize) -> Self {
        let limit = match limit {
            0 => MAX_QUERY_TERMS,
            n => n.min(MAX_QUERY_TERMS),
        };
        let Some(normalized) = normalize(query) else {
            return Self::default();
        };

        let mut seen = AHashSet::new();
        let mut terms = Vec::new();
        let mut push = |term: String| {
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        };

        push(normalized.clone());
        progressive_prefixes(&normalized).into_iter().for_each(&mut push);

        for word in normalized.split_whitespace() {
            push(word.to_string());
            progressive_prefixes(word).into_iter().for_each(&mut push);
        }

        let dropped = terms.len().saturating_sub(limit);
        if dropped > 0 {
            debug!(dropped, limit, "query terms truncated");
            terms.truncate(limit);
        }

        Self { terms, dropped }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of terms removed by the cap
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

/// Prepare the filter values for a search string (at most
/// [`MAX_QUERY_TERMS`]). Blank queries give an empty list.
///
/// ```
/// use fleetdex::query::prepare_search_terms;
///
/// assert_eq!(
///     prepare_search_terms("Tesla Model"),
///     vec!["tesla model", "tesla", "model"]
/// );
/// ```
pub fn prepare_search_terms(search_term: &str) -> Vec<String> {
    QueryTermSet::new(search_term).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_order() {
        assert_eq!(
            prepare_search_terms("Tesla Model S"),
            vec!["tesla model s", "tesla", "tesla model", "model", "s"]
        );
    }

    #[test]
    fn test_terms_hyphenated_word() {
        assert_eq!(
            prepare_search_terms("red model-x"),
            vec!["red model-x", "red", "red model", "model-x", "model"]
        );
    }

    #[test]
    fn test_terms_email() {
        let terms = prepare_search_terms("osk.r.pnk@gmail.com");
        assert_eq!(terms[0], "osk.r.pnk@gmail.com");
        assert_eq!(
            terms,
            vec!["osk.r.pnk@gmail.com", "osk", "osk.r", "osk.r.pnk@gmail"]
        );
    }

    #[test]
    fn test_terms_single_word() {
        assert_eq!(prepare_search_terms("  COROLLA "), vec!["corolla"]);
    }

    #[test]
    fn test_terms_blank() {
        assert!(prepare_search_terms("").is_empty());
        assert!(prepare_search_terms("   ").is_empty());
        assert_eq!(QueryTermSet::new("\t").dropped(), 0);
    }

    #[test]
    fn test_terms_capped() {
        let query = (0..40).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let set = QueryTermSet::new(&query);

        assert_eq!(set.len(), MAX_QUERY_TERMS);
        assert!(set.dropped() > 0);
        // The whole query always survives the cap
        assert_eq!(set.as_slice()[0], query);
        assert_eq!(set.as_slice()[1], "w0");
    }

    #[test]
    fn test_terms_custom_limit() {
        let set = QueryTermSet::with_limit("Tesla Model S", 2);
        assert_eq!(set.as_slice(), ["tesla model s", "tesla"]);
        assert_eq!(set.dropped(), 3);

        // A limit above the store maximum is clamped
        let set = QueryTermSet::with_limit(&"a.".repeat(100), 1000);
        assert_eq!(set.len(), MAX_QUERY_TERMS);
    }

    #[test]
    fn test_terms_zero_limit_uses_default_cap() {
        assert_eq!(QueryTermSet::with_limit("tesla", 0).as_slice(), ["tesla"]);
        assert_eq!(
            QueryTermSet::with_limit("Tesla Model S", 0),
            QueryTermSet::new("Tesla Model S")
        );

        let query = (0..40).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        assert_eq!(QueryTermSet::with_limit(&query, 0).len(), MAX_QUERY_TERMS);
    }
}
