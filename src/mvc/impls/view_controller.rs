use std::sync::Arc;
use serde_json::Value;
use crate::common::common::is_private_name;
use crate::mvc::enums::mvc_error::MvcError;
use crate::mvc::structs::model::Model;
use crate::mvc::structs::view_controller::ViewController;
use crate::mvc::traits::model_behavior::ModelBehavior;
use crate::storage::types::Document;

impl ViewController {
    pub fn new(model: Arc<Model>, behavior: Arc<dyn ModelBehavior>) -> ViewController {
        ViewController {
            model,
            behavior,
        }
    }

    pub fn name(&self) -> &str {
        self.model.name()
    }

    pub fn model(&self) -> Arc<Model> {
        self.model.clone()
    }

    pub async fn validate_access(&self, session_id: &str) -> Result<(), MvcError> {
        self.behavior.validate_access(session_id).await
    }

    /// Public properties the session may read.
    pub async fn get_model(&self, session_id: &str) -> Result<Document, MvcError> {
        self.behavior.validate_access(session_id).await?;
        let mut document = Document::new();
        for property in &self.model.properties {
            if is_private_name(&property.name) {
                continue;
            }
            if self.behavior.validate_get(&property.name, session_id).await.is_ok() {
                document.insert(property.name.clone(), property.get());
            }
        }
        Ok(document)
    }

    pub async fn set_value(&self, property_name: &str, value: Value, session_id: &str) -> Result<bool, MvcError> {
        self.behavior.validate_access(session_id).await?;
        if is_private_name(property_name) {
            return Err(MvcError::PrivateMember(property_name.to_string()));
        }
        if !self.model.has_property(property_name) {
            return Err(MvcError::UnknownProperty(property_name.to_string()));
        }
        self.behavior.validate_set(property_name, &value, session_id).await?;
        self.model.set(property_name, value).await
    }

    pub async fn invoke(&self, method_name: &str, args: Vec<Value>, session_id: &str) -> Result<Value, MvcError> {
        self.behavior.validate_access(session_id).await?;
        if is_private_name(method_name) {
            return Err(MvcError::PrivateMember(method_name.to_string()));
        }
        self.behavior.validate_invoke(method_name, session_id).await?;
        self.behavior.invoke(&self.model, method_name, args).await
    }

    /// Whether a pushed change of `property_name` may reach `session_id`.
    pub async fn can_observe(&self, property_name: &str, session_id: &str) -> bool {
        !is_private_name(property_name)
            && self.behavior.validate_access(session_id).await.is_ok()
            && self.behavior.validate_get(property_name, session_id).await.is_ok()
    }
}
