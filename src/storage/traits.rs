/// A named collection of JSON documents.
pub mod document_collection;

/// Hands out collections by name.
pub mod storage_provider;
