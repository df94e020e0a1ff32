//! Array-membership matching and an in-memory document store.
//!
//! A document matches when its keyword array shares at least one value with
//! the query terms. This is prefix and token matching: a query that only
//! appears inside a longer keyword does not match.

use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

use super::terms::{MAX_QUERY_TERMS, QueryTermSet};
use crate::index::{IndexedDocument, KeywordSet, SearchableDocument};

/// Errors raised by the document store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("filter accepts at most {max} values, got {given}")]
    TooManyFilterValues { given: usize, max: usize },

    #[error("document not found: {0}")]
    DocumentNotFound(String),
}

/// Check whether a persisted keyword array intersects the filter values
pub fn matches<K, T>(keywords: &[K], terms: &[T]) -> bool
where
    K: AsRef<str>,
    T: AsRef<str>,
{
    terms
        .iter()
        .any(|term| keywords.iter().any(|k| k.as_ref() == term.as_ref()))
}

/// In-memory document store with array-membership search.
///
/// Keyword arrays are stored alongside each document and replaced as a whole
/// whenever the document is written. Documents are keyed by id and iterated
/// in id order.
#[derive(Debug, Clone)]
pub struct MemoryStore<D> {
    documents: BTreeMap<String, Stored<D>>,
}

#[derive(Debug, Clone)]
struct Stored<D> {
    indexed: IndexedDocument<D>,
    keywords: KeywordSet,
}

impl<D> Stored<D> {
    fn new(indexed: IndexedDocument<D>) -> Self
    where
        D: SearchableDocument,
    {
        let keywords = indexed.search_keywords().iter().collect();
        Self { indexed, keywords }
    }
}

impl<D> Default for MemoryStore<D> {
    fn default() -> Self {
        Self {
            documents: BTreeMap::new(),
        }
    }
}

impl<D: SearchableDocument> MemoryStore<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a document, regenerating its keywords
    pub fn upsert(&mut self, document: D) {
        let id = document.id().to_string();
        let indexed = IndexedDocument::new(document);
        debug!(id = %id, keywords = indexed.search_keywords().len(), "upsert");
        self.documents.insert(id, Stored::new(indexed));
    }

    /// Overwrite an existing document, regenerating its keywords
    pub fn replace(&mut self, id: &str, document: D) -> Result<(), StoreError> {
        if !self.documents.contains_key(id) {
            return Err(StoreError::DocumentNotFound(id.to_string()));
        }
        if document.id() != id {
            self.documents.remove(id);
        }
        self.upsert(document);
        Ok(())
    }

    /// Load a document with its persisted keyword array as-is
    pub fn insert_indexed(&mut self, indexed: IndexedDocument<D>) {
        let id = indexed.document().id().to_string();
        self.documents.insert(id, Stored::new(indexed));
    }

    /// Remove a document together with its keywords
    pub fn remove(&mut self, id: &str) -> Option<D> {
        self.documents
            .remove(id)
            .map(|stored| stored.indexed.into_document())
    }

    pub fn get(&self, id: &str) -> Option<&IndexedDocument<D>> {
        self.documents.get(id).map(|stored| &stored.indexed)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Return documents whose keywords contain any of `values`, in id order.
    ///
    /// Fails when more values are given than the filter accepts.
    pub fn search_any<S>(
        &self,
        values: &[S],
        limit: usize,
    ) -> Result<Vec<&IndexedDocument<D>>, StoreError>
    where
        S: AsRef<str> + Sync,
    {
        if values.len() > MAX_QUERY_TERMS {
            return Err(StoreError::TooManyFilterValues {
                given: values.len(),
                max: MAX_QUERY_TERMS,
            });
        }
        if values.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        // Collect keeps the map's id order
        let mut hits: Vec<&IndexedDocument<D>> = self
            .documents
            .par_iter()
            .filter(|(_, stored)| stored.keywords.intersects(values))
            .map(|(_, stored)| &stored.indexed)
            .collect();

        hits.truncate(limit);
        debug!(values = values.len(), hits = hits.len(), "search_any");

        Ok(hits)
    }

    /// Prepare query terms from a search string and run the membership search
    pub fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<&IndexedDocument<D>>, StoreError> {
        let terms = QueryTermSet::new(query);
        self.search_any(terms.as_slice(), limit)
    }
}

impl<D: SearchableDocument> FromIterator<D> for MemoryStore<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut store = Self::new();
        for document in iter {
            store.upsert(document);
        }
        store
    }
}
