use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage connection error: {0}")]
    Connection(String),

    #[error("Storage operation error: {0}")]
    Operation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
