use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, ServerName};
use rustls::{ClientConfig, RootCertStore, ServerConfig};
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl CertificateBundle {
    pub fn load_from_files(cert_path: &str, key_path: &str) -> Result<CertificateBundle, CertificateError> {
        let tls_certs = Self::load_certs(cert_path)?;
        let tls_key = Self::parse_private_key(key_path)?;
        Ok(CertificateBundle {
            certs: tls_certs,
            key: tls_key,
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn server_config(&self) -> Result<ServerConfig, CertificateError> {
        ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
            .with_safe_default_protocol_versions()
            .map_err(|e| CertificateError::ConfigError(e.to_string()))?
            .with_no_client_auth()
            .with_single_cert(self.certs.clone(), self.key.clone_key())
            .map_err(|e| CertificateError::ConfigError(e.to_string()))
    }

    /// Client configuration trusting only the certificates found in `ca_path`.
    pub fn client_config(ca_path: &str) -> Result<ClientConfig, CertificateError> {
        let mut roots = RootCertStore::empty();
        for cert in Self::load_certs(ca_path)? {
            roots.add(cert).map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        }
        Ok(ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
            .with_safe_default_protocol_versions()
            .map_err(|e| CertificateError::ConfigError(e.to_string()))?
            .with_root_certificates(roots)
            .with_no_client_auth())
    }

    pub fn server_name(name: &str) -> Result<ServerName<'static>, CertificateError> {
        ServerName::try_from(name.to_string())
            .map_err(|e| CertificateError::InvalidServerName(format!("{}: {}", name, e)))
    }

    fn load_certs(cert_path: &str) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
        let certs_file = File::open(cert_path)
            .map_err(|e| CertificateError::CertFileNotFound(format!("{}: {}", cert_path, e)))?;
        let mut certs_reader = BufReader::new(certs_file);
        let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut certs_reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertParseError(e.to_string()))?;
        if tls_certs.is_empty() {
            return Err(CertificateError::CertParseError("No certificates found in file".to_string()));
        }
        Ok(tls_certs)
    }

    fn parse_private_key(key_path: &str) -> Result<PrivateKeyDer<'static>, CertificateError> {
        let key_file = File::open(key_path)
            .map_err(|e| CertificateError::KeyFileNotFound(format!("{}: {}", key_path, e)))?;
        let mut reader = BufReader::new(key_file);
        rustls_pemfile::private_key(&mut reader)
            .map_err(|e| CertificateError::KeyParseError(e.to_string()))?
            .ok_or(CertificateError::NoKeyFound)
    }
}
