use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyChange {
    pub property_name: String,
    pub old_value: Value,
    pub new_value: Value,
    /// `true` for local edits that must be replicated to other workers.
    pub sync_required: bool,
}
