use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncMessage {
    pub model_name: String,
    pub property_name: String,
    #[serde(default)]
    pub old_value: Value,
    pub new_value: Value,
}
