use thiserror::Error;
use crate::storage::enums::storage_error::StorageError;

#[derive(Error, Debug)]
pub enum MvcError {
    #[error("No view with such name")]
    UnknownView(String),

    #[error("No property with name '{0}'")]
    UnknownProperty(String),

    #[error("No method with name '{0}'")]
    UnknownMethod(String),

    #[error("'{0}' is private")]
    PrivateMember(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
