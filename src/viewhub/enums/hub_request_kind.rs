use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HubRequestKind {
    ModelRequest,
    EditRequest,
    InvokeRequest,
    SubscribeRequest,
    UnsubscribeRequest,
}
