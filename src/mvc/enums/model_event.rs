use serde_json::Value;
use crate::mvc::structs::property_change::PropertyChange;
use crate::mvc::structs::sync_message::SyncMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    Loaded,
    Changed(PropertyChange),
    SendSync(SyncMessage),
    Data { sender: String, data: Value },
    PropertySaved { property_name: String, value: Value },
    Saved,
    Error(String),
}
