use crate::cluster::types::WorkerId;

/// Workers in the order they were added, each with its last reported weight.
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    pub(crate) workers: Vec<(WorkerId, u64)>,
}
