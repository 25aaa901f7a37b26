use thiserror::Error;
use crate::storage::enums::storage_error::StorageError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Malformed session document: {0}")]
    Malformed(#[from] serde_json::Error),
}
