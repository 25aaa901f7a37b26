use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncEnvelope {
    pub model_name: String,
    /// Relay to this worker only instead of every other worker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub data: Value,
}
