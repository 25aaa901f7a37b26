use thiserror::Error;
use crate::sessions::enums::session_error::SessionError;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Connection {0} is closed")]
    ConnectionClosed(u64),
}
