use serde_json::Value;
use crate::cluster::enums::message_type::MessageType;

/// A validated `sync` or `data` record from another node, unwrapped for the model layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMessage {
    pub message_type: MessageType,
    pub sender: String,
    pub model_name: Option<String>,
    pub data: Value,
}
