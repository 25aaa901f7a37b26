use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub sid: String,
    pub last_access: i64,
    pub expired: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}
