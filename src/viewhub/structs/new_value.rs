use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewValue {
    pub view_name: String,
    pub property_name: String,
    pub old_value: Value,
    pub new_value: Value,
    pub session_id: String,
}
