use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record exceeds maximum frame size of {0} bytes")]
    FrameTooLarge(usize),
}
