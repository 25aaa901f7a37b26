use crate::cluster::structs::cluster_message::ClusterMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    Connected,
    Disconnected,
    Message(ClusterMessage),
}
