use crate::cluster::types::WorkerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterEvent {
    /// The worker's first record passed authentication.
    WorkerConnected(WorkerId),
    /// An authorized worker's link closed.
    WorkerDisconnected(WorkerId),
}
