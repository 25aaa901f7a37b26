use async_trait::async_trait;
use serde_json::Value;
use crate::mvc::enums::mvc_error::MvcError;
use crate::mvc::structs::model::Model;

/// Per-model hooks consulted by the controller. Every validator allows by default.
#[async_trait]
pub trait ModelBehavior: Send + Sync {
    async fn validate_access(&self, _session_id: &str) -> Result<(), MvcError> {
        Ok(())
    }

    async fn validate_get(&self, _property_name: &str, _session_id: &str) -> Result<(), MvcError> {
        Ok(())
    }

    async fn validate_set(&self, _property_name: &str, _value: &Value, _session_id: &str) -> Result<(), MvcError> {
        Ok(())
    }

    async fn validate_invoke(&self, _method_name: &str, _session_id: &str) -> Result<(), MvcError> {
        Ok(())
    }

    async fn invoke(&self, _model: &Model, method_name: &str, _args: Vec<Value>) -> Result<Value, MvcError> {
        Err(MvcError::UnknownMethod(method_name.to_string()))
    }
}
