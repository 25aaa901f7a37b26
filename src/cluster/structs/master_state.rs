use std::collections::HashMap;
use crate::cluster::structs::balancer::Balancer;
use crate::cluster::structs::worker_record::WorkerRecord;
use crate::cluster::types::WorkerId;

/// Registry and balancer live under one lock so membership changes hit both at once.
#[derive(Debug, Default)]
pub struct MasterState {
    pub workers: HashMap<WorkerId, WorkerRecord>,
    pub balancer: Balancer,
}
