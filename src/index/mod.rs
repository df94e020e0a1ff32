pub mod documents;
pub mod keywords;
pub mod reindex;

pub use documents::{
    Car, IndexedDocument, SearchableDocument, User, generate_car_search_keywords,
    generate_user_search_keywords,
};
pub use keywords::{KeywordSet, generate_search_keywords, generate_search_keywords_from_fields};
pub use reindex::{ReindexStats, read_documents, reindex_documents, write_documents};
