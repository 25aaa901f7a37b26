use thiserror::Error;
use crate::cluster::enums::encoding_error::EncodingError;
use crate::ssl::enums::certificate_error::CertificateError;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TLS error: {0}")]
    Tls(#[from] CertificateError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Authentication failed for {0}")]
    AuthenticationFailed(String),

    #[error("Not connected")]
    NotConnected,
}
