use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::storage::types::Document;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseBody {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
