//! # fleetdex - Keyword Indexing for Array-Membership Stores
//!
//! fleetdex provides prefix and token search for document stores that only
//! offer equality, range and "array contains any of N values" filters. It
//! has no search engine behind it: every document carries a precomputed
//! keyword array, and every query is expanded into a short list of terms
//! that one membership filter can test.
//!
//! ## Architecture
//!
//! - [`utils`] - Normalizer, tokenizer and progressive-prefix expander, plus
//!   configuration, logging and progress reporting
//! - [`index`] - Write path: keyword sets for documents (cars, users)
//! - [`query`] - Read path: capped query terms, the match predicate and an
//!   in-memory reference store
//! - [`output`] - Terminal and JSON output
//!
//! ## Quick Start
//!
//! ```
//! use fleetdex::index::{Car, generate_car_search_keywords};
//! use fleetdex::query::{matches, prepare_search_terms};
//!
//! let car = Car {
//!     id: "c1".to_string(),
//!     model: Some("Tesla Model S".to_string()),
//!     plate: Some("WX-1234".to_string()),
//!     color: Some("Red".to_string()),
//!     ..Default::default()
//! };
//!
//! // Persisted with the document, replaced on every write
//! let keywords = generate_car_search_keywords(&car);
//!
//! // Built per search, at most 30 values
//! let terms = prepare_search_terms("model s");
//! assert!(matches(&keywords, &terms));
//!
//! // Substrings inside a keyword do not match
//! assert!(!matches(&keywords, &prepare_search_terms("odel")));
//! ```
//!
//! ## Matching
//!
//! A query matches when one of its terms equals one of the document's
//! keywords. Keywords are whole values, separator-bounded prefixes and
//! tokens, so matching is by prefix or token, never by arbitrary substring.

pub mod index;
pub mod output;
pub mod query;
pub mod utils;
