use parking_lot::RwLock;
use crate::storage::types::Document;

#[derive(Debug, Default)]
pub struct MemoryCollection {
    pub(crate) name: String,
    pub(crate) documents: RwLock<Vec<Document>>,
}
