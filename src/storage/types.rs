use serde_json::{Map, Value};

pub type Document = Map<String, Value>;
