use std::sync::Arc;
use async_trait::async_trait;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::memory_collection::MemoryCollection;
use crate::storage::structs::memory_storage::MemoryStorage;
use crate::storage::traits::document_collection::DocumentCollection;
use crate::storage::traits::storage_provider::StorageProvider;

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    pub fn memory_collection(&self, name: &str) -> Arc<MemoryCollection> {
        self.collections
            .write()
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCollection::new(name)))
            .clone()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn collection(&self, name: &str) -> Result<Arc<dyn DocumentCollection>, StorageError> {
        Ok(self.memory_collection(name))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
