use log::debug;
use crate::cluster::structs::balancer::Balancer;
use crate::cluster::types::WorkerId;

impl Balancer {
    pub fn new() -> Balancer {
        Balancer::default()
    }

    /// Registers a worker with weight `0`. Re-adding a known worker is a no-op.
    pub fn add_worker(&mut self, worker_id: &str) {
        if self.position(worker_id).is_none() {
            debug!("[BALANCER] Added worker {worker_id}");
            self.workers.push((worker_id.to_string(), 0));
        }
    }

    pub fn remove_worker(&mut self, worker_id: &str) -> bool {
        match self.position(worker_id) {
            None => false,
            Some(index) => {
                self.workers.remove(index);
                debug!("[BALANCER] Removed worker {worker_id}");
                true
            }
        }
    }

    /// Unknown workers are ignored.
    pub fn set_weight(&mut self, worker_id: &str, weight: u64) -> bool {
        match self.workers.iter_mut().find(|(id, _)| id == worker_id) {
            None => false,
            Some(entry) => {
                entry.1 = weight;
                true
            }
        }
    }

    pub fn weight(&self, worker_id: &str) -> Option<u64> {
        self.workers.iter().find(|(id, _)| id == worker_id).map(|(_, weight)| *weight)
    }

    /// Lightest worker; ties go to the one added first.
    pub fn get_worker(&self) -> Option<WorkerId> {
        let mut selected: Option<&(WorkerId, u64)> = None;
        for entry in &self.workers {
            match selected {
                Some((_, weight)) if entry.1 >= *weight => {}
                _ => selected = Some(entry),
            }
        }
        selected.map(|(id, _)| id.clone())
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    fn position(&self, worker_id: &str) -> Option<usize> {
        self.workers.iter().position(|(id, _)| id == worker_id)
    }
}
