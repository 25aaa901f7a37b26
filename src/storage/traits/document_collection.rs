use async_trait::async_trait;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::types::Document;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    fn name(&self) -> String;

    /// Most recently inserted document matching `filter`.
    async fn find_one(&self, filter: &Document) -> Result<Option<Document>, StorageError>;

    /// All matching documents, oldest first.
    async fn find(&self, filter: &Document) -> Result<Vec<Document>, StorageError>;

    async fn insert(&self, document: Document) -> Result<(), StorageError>;

    /// Merges `set` into the most recently inserted match. Returns `false` when nothing matched.
    async fn update(&self, filter: &Document, set: &Document) -> Result<bool, StorageError>;

    /// Removes every match and returns how many were removed.
    async fn remove(&self, filter: &Document) -> Result<u64, StorageError>;
}
