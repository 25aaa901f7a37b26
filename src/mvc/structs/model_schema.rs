use serde_json::Value;

/// Model name plus its properties with their default values, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    pub name: String,
    pub properties: Vec<(String, Value)>,
}
