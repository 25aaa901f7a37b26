use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionsConfig {
    pub collection: String,
    /// Seconds a session stays valid after its last access.
    pub lifetime: u64,
    pub check_expired_interval: u64,
}
