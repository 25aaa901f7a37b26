use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::error;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::ConnectOptions;
use crate::storage::enums::storage_error::StorageError;
use crate::storage::structs::sqlite_collection::SqliteCollection;
use crate::storage::structs::sqlite_storage::SqliteStorage;
use crate::storage::traits::document_collection::DocumentCollection;
use crate::storage::traits::storage_provider::StorageProvider;

const LOG_PREFIX: &str = "[STORAGE]";

impl SqliteStorage {
    #[tracing::instrument(level = "debug")]
    pub async fn connect(dsl: &str) -> Result<SqliteStorage, StorageError> {
        let options = SqliteConnectOptions::from_str(dsl)
            .map_err(|e| StorageError::Connection(format!("{dsl}: {e}")))?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        let mut pool_options = SqlitePoolOptions::new();
        if dsl.contains(":memory:") {
            pool_options = pool_options.max_connections(1);
        }
        let pool = pool_options
            .connect_with(options.create_if_missing(true))
            .await
            .map_err(|e| {
                error!("{} Unable to connect to SQLite on DSL {}: {}", LOG_PREFIX, dsl, e);
                StorageError::Connection(e.to_string())
            })?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (\
                id INTEGER PRIMARY KEY AUTOINCREMENT, \
                collection TEXT NOT NULL, \
                body TEXT NOT NULL\
            )"
        ).execute(&pool).await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS documents_collection ON documents (collection)")
            .execute(&pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS documents_name ON documents (collection, json_extract(body, '$.name'))")
            .execute(&pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS documents_sid ON documents (collection, json_extract(body, '$.sid'))")
            .execute(&pool)
            .await?;

        Ok(SqliteStorage { pool })
    }
}

#[async_trait]
impl StorageProvider for SqliteStorage {
    async fn collection(&self, name: &str) -> Result<Arc<dyn DocumentCollection>, StorageError> {
        Ok(Arc::new(SqliteCollection {
            name: name.to_string(),
            pool: self.pool.clone(),
        }))
    }

    fn backend_name(&self) -> &'static str {
        "sqlite3"
    }
}
