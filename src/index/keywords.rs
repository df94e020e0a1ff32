use ahash::AHashSet;
use tracing::trace;

use crate::utils::{normalize, progressive_prefixes, tokenize};

/// The deduplicated keyword set of one document.
///
/// Generated keywords are normalized before insertion; membership is plain
/// string equality. A set is always rebuilt from the document's current field
/// values; there is no way to patch an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: AHashSet<String>,
}

impl KeywordSet {
    /// Build the keyword set for a single field value
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::default();
        set.add_field(text);
        set
    }

    /// Build the keyword set for several fields. Absent fields contribute
    /// nothing.
    pub fn from_fields(fields: &[Option<&str>]) -> Self {
        let mut set = Self::default();
        for field in fields.iter().flatten() {
            set.add_field(field);
        }
        trace!(fields = fields.len(), keywords = set.len(), "built keyword set");
        set
    }

    fn add_field(&mut self, text: &str) {
        let Some(normalized) = normalize(text) else {
            return;
        };

        self.keywords.extend(progressive_prefixes(&normalized));
        for token in tokenize(&normalized) {
            self.keywords.extend(progressive_prefixes(&token));
            self.keywords.insert(token);
        }
        self.keywords.insert(normalized);
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Check whether any of `terms` is a member of this set
    pub fn intersects<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        terms.iter().any(|term| self.contains(term.as_ref()))
    }

    /// Convert into the persisted array form. Sorted so repeated runs
    /// produce identical output.
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut keywords: Vec<String> = self.keywords.into_iter().collect();
        keywords.sort_unstable();
        keywords
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    /// Collect already-persisted keywords back into a set, as stored.
    /// Blank entries are skipped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keywords: iter
                .into_iter()
                .map(|k| k.as_ref().to_string())
                .filter(|k| !k.trim().is_empty())
                .collect(),
        }
    }
}

/// Generate the search keywords for one field value.
///
/// The result holds the whole normalized value, its progressive prefixes,
/// its tokens and each token's prefixes, without duplicates. Blank input
/// gives an empty result.
///
/// ```
/// use fleetdex::index::generate_search_keywords;
///
/// let keywords = generate_search_keywords("Tesla Model S");
/// assert!(keywords.contains(&"tesla model s".to_string()));
/// assert!(keywords.contains(&"tesla model".to_string()));
/// assert!(keywords.contains(&"model".to_string()));
/// ```
pub fn generate_search_keywords(text: &str) -> Vec<String> {
    KeywordSet::from_text(text).into_sorted_vec()
}

/// Generate the search keywords across several fields of one document
pub fn generate_search_keywords_from_fields(fields: &[Option<&str>]) -> Vec<String> {
    KeywordSet::from_fields(fields).into_sorted_vec()
}
