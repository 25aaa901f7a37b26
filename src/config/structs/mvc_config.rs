use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MvcConfig {
    pub models_collection: String,
    /// Seconds a view hub request may stay unanswered. `0` disables the timeout.
    pub request_timeout: u64,
}
