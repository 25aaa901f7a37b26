use async_trait::async_trait;
use parking_lot::RwLock;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::storage::{apply_set, matches_filter};
use crate::storage::structs::memory_collection::MemoryCollection;
use crate::storage::traits::document_collection::DocumentCollection;
use crate::storage::types::Document;

impl MemoryCollection {
    pub fn new(name: &str) -> MemoryCollection {
        MemoryCollection {
            name: name.to_string(),
            documents: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn find_one(&self, filter: &Document) -> Result<Option<Document>, StorageError> {
        let documents = self.documents.read();
        Ok(documents.iter().rev().find(|document| matches_filter(document, filter)).cloned())
    }

    async fn find(&self, filter: &Document) -> Result<Vec<Document>, StorageError> {
        let documents = self.documents.read();
        Ok(documents.iter().filter(|document| matches_filter(document, filter)).cloned().collect())
    }

    async fn insert(&self, document: Document) -> Result<(), StorageError> {
        self.documents.write().push(document);
        Ok(())
    }

    async fn update(&self, filter: &Document, set: &Document) -> Result<bool, StorageError> {
        let mut documents = self.documents.write();
        match documents.iter_mut().rev().find(|document| matches_filter(document, filter)) {
            None => Ok(false),
            Some(document) => {
                apply_set(document, set);
                Ok(true)
            }
        }
    }

    async fn remove(&self, filter: &Document) -> Result<u64, StorageError> {
        let mut documents = self.documents.write();
        let before = documents.len();
        documents.retain(|document| !matches_filter(document, filter));
        Ok((before - documents.len()) as u64)
    }
}
