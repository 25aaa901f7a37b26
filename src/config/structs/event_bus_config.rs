use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventBusConfig {
    /// Address the master binds to and workers connect to.
    pub host: String,
    pub port: u16,
    /// Stamped on every master to worker record.
    pub master_secret: String,
    /// Stamped on every worker to master record.
    pub worker_secret: String,
    /// Fixed delay between worker reconnect attempts, in milliseconds.
    pub reconnect_interval: u64,
    /// Upper bound for a single buffered record, in bytes.
    pub max_frame_size: usize,
    pub ssl: bool,
    pub ssl_cert: String,
    pub ssl_key: String,
    /// CA bundle the worker trusts when `ssl` is enabled.
    pub ssl_ca: String,
    pub ssl_server_name: String,
}
