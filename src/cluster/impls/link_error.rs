use crate::cluster::enums::link_error::LinkError;

impl LinkError {
    /// Fatal errors stop the reconnect loop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, LinkError::AuthenticationFailed(_) | LinkError::Tls(_))
    }
}
