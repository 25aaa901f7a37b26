use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Address,
    Load,
    Sync,
    Data,
    #[default]
    #[serde(other)]
    Unknown,
}
