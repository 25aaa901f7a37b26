use serde_json::Value;
use crate::mvc::structs::model_schema::ModelSchema;

impl ModelSchema {
    pub fn new(name: &str) -> ModelSchema {
        ModelSchema {
            name: name.to_string(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, default: impl Into<Value>) -> ModelSchema {
        self.properties.push((name.to_string(), default.into()));
        self
    }
}
