use std::collections::VecDeque;
use crate::cluster::structs::cluster_message::ClusterMessage;
use crate::cluster::types::RecordSender;

#[derive(Debug, Default)]
pub struct LinkState {
    pub connected: bool,
    /// Stamped records waiting for the next connection, oldest first.
    pub queue: VecDeque<ClusterMessage>,
    pub writer: Option<RecordSender>,
}
