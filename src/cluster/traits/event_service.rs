use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait EventService: Send + Sync {
    /// Matched against the `serviceName` of inbound `data` records.
    fn name(&self) -> &str;

    async fn handle_data(&self, sender: &str, model_name: Option<String>, data: Value);
}
