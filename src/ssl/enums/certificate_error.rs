use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("Key file not found: {0}")]
    KeyFileNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("Failed to parse key: {0}")]
    KeyParseError(String),
    #[error("No private key found in file")]
    NoKeyFound,
    #[error("Failed to build TLS configuration: {0}")]
    ConfigError(String),
    #[error("Invalid server name: {0}")]
    InvalidServerName(String),
    #[error("TLS handshake rejected: {0}")]
    HandshakeRejected(String),
}
