use std::sync::Arc;
use async_trait::async_trait;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::traits::document_collection::DocumentCollection;

#[async_trait]
pub trait StorageProvider: Send + Sync {
    async fn collection(&self, name: &str) -> Result<Arc<dyn DocumentCollection>, StorageError>;

    fn backend_name(&self) -> &'static str;
}
