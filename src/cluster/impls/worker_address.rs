use std::fmt;
use crate::cluster::structs::worker_address::WorkerAddress;

impl fmt::Display for WorkerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = if self.secure { "wss" } else { "ws" };
        write!(f, "{}://{}:{}", scheme, self.host, self.port)
    }
}
