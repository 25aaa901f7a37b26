use std::sync::Arc;
use log::info;
use serde_json::Value;
use crate::config::enums::database_engine::DatabaseEngine;
use crate::config::structs::database_config::DatabaseConfig;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::memory_storage::MemoryStorage;
use crate::storage::structs::sqlite_storage::SqliteStorage;
use crate::storage::traits::storage_provider::StorageProvider;
use crate::storage::types::Document;

pub fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| document.get(key) == Some(expected))
}

pub fn apply_set(document: &mut Document, set: &Document) {
    for (key, value) in set {
        document.insert(key.clone(), value.clone());
    }
}

pub fn filter_by(key: &str, value: impl Into<Value>) -> Document {
    let mut filter = Document::new();
    filter.insert(key.to_string(), value.into());
    filter
}

pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn StorageProvider>, StorageError> {
    match config.engine {
        DatabaseEngine::memory => {
            info!("[STORAGE] Using in-memory document storage");
            Ok(Arc::new(MemoryStorage::new()))
        }
        DatabaseEngine::sqlite3 => {
            info!("[STORAGE] Connecting to SQLite on {}", config.path);
            Ok(Arc::new(SqliteStorage::connect(config.path.as_str()).await?))
        }
    }
}
