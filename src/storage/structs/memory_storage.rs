use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::storage::structs::memory_collection::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub(crate) collections: RwLock<HashMap<String, Arc<MemoryCollection>>>,
}
