pub mod matcher;
pub mod terms;

pub use matcher::{MemoryStore, StoreError, matches};
pub use terms::{MAX_QUERY_TERMS, QueryTermSet, prepare_search_terms};
