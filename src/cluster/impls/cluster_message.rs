use serde_json::Value;
use crate::cluster::enums::encoding_error::EncodingError;
use crate::cluster::enums::message_type::MessageType;
use crate::cluster::structs::cluster_message::ClusterMessage;
use crate::cluster::structs::data_envelope::DataEnvelope;
use crate::cluster::structs::sync_envelope::SyncEnvelope;
use crate::cluster::structs::worker_address::WorkerAddress;
use crate::common::common::constant_time_compare;

impl ClusterMessage {
    pub fn new(message_type: MessageType, value: Value) -> ClusterMessage {
        ClusterMessage {
            message_type,
            sender: None,
            value,
            secret: String::new(),
        }
    }

    pub fn address(address: &WorkerAddress) -> Result<ClusterMessage, EncodingError> {
        Ok(Self::new(MessageType::Address, serde_json::to_value(address)?))
    }

    pub fn load(load: u64) -> ClusterMessage {
        Self::new(MessageType::Load, Value::from(load))
    }

    pub fn sync(sender: &str, envelope: &SyncEnvelope) -> Result<ClusterMessage, EncodingError> {
        Ok(Self::new(MessageType::Sync, serde_json::to_value(envelope)?).with_sender(sender))
    }

    pub fn data(sender: &str, envelope: &DataEnvelope) -> Result<ClusterMessage, EncodingError> {
        Ok(Self::new(MessageType::Data, serde_json::to_value(envelope)?).with_sender(sender))
    }

    pub fn with_sender(mut self, sender: &str) -> ClusterMessage {
        self.sender = Some(sender.to_string());
        self
    }

    pub fn stamped(mut self, secret: &str) -> ClusterMessage {
        self.secret = secret.to_string();
        self
    }

    pub fn has_secret(&self, expected: &str) -> bool {
        !self.secret.is_empty() && constant_time_compare(&self.secret, expected)
    }
}
