use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::cluster::enums::message_type::MessageType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterMessage {
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub secret: String,
}
