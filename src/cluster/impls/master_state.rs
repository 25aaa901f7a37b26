use crate::cluster::structs::master_state::MasterState;
use crate::cluster::structs::worker_record::WorkerRecord;
use crate::cluster::types::{FrameSender, WorkerId};

impl MasterState {
    pub fn new() -> MasterState {
        MasterState::default()
    }

    pub fn add_connection(&mut self, worker_id: &str, sender: FrameSender) {
        self.workers.insert(worker_id.to_string(), WorkerRecord {
            id: worker_id.to_string(),
            sender,
            authorized: false,
            weight: 0,
            address: None,
            connected_at: chrono::Utc::now(),
        });
    }

    /// Returns `true` only on the transition to authorized.
    pub fn authorize(&mut self, worker_id: &str) -> bool {
        match self.workers.get_mut(worker_id) {
            Some(record) if !record.authorized => {
                record.authorized = true;
                self.balancer.add_worker(worker_id);
                true
            }
            _ => false,
        }
    }

    /// Removes the worker from the registry and the balancer. Returns the record only
    /// when it was authorized.
    pub fn remove(&mut self, worker_id: &str) -> Option<WorkerRecord> {
        self.balancer.remove_worker(worker_id);
        self.workers.remove(worker_id).filter(|record| record.authorized)
    }

    pub fn set_weight(&mut self, worker_id: &str, weight: u64) -> bool {
        match self.workers.get_mut(worker_id) {
            Some(record) if record.authorized => {
                record.weight = weight;
                self.balancer.set_weight(worker_id, weight)
            }
            _ => false,
        }
    }

    pub fn authorized_ids(&self) -> Vec<WorkerId> {
        let mut ids: Vec<WorkerId> = self.workers.values()
            .filter(|record| record.authorized)
            .map(|record| record.id.clone())
            .collect();
        ids.sort();
        ids
    }
}
