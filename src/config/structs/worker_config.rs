use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkerConfig {
    /// Host advertised to the master and handed out by discovery.
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub bind_address: String,
    pub ssl_cert: String,
    pub ssl_key: String,
    /// Load report period, in milliseconds.
    pub load_send_interval: u64,
}
