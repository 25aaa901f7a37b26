use crate::cluster::structs::worker_address::WorkerAddress;
use crate::cluster::types::{FrameSender, WorkerId};

#[derive(Debug, Clone)]
pub struct WorkerRecord {
    pub id: WorkerId,
    pub sender: FrameSender,
    pub authorized: bool,
    pub weight: u64,
    pub address: Option<WorkerAddress>,
    pub connected_at: chrono::DateTime<chrono::Utc>,
}
