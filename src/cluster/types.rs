use tokio::sync::mpsc;
use crate::cluster::structs::cluster_message::ClusterMessage;

pub type WorkerId = String;

/// Encoded, delimited records waiting for a socket writer.
pub type FrameSender = mpsc::UnboundedSender<Vec<u8>>;

/// Stamped records waiting for the link writer; encoded at write time.
pub type RecordSender = mpsc::UnboundedSender<ClusterMessage>;
