use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkerAddress {
    pub host: String,
    pub port: u16,
    pub secure: bool,
}
