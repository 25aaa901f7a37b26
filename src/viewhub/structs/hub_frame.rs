use serde::{Deserialize, Serialize};
use crate::viewhub::enums::hub_request_kind::HubRequestKind;
use crate::viewhub::structs::client_request::ClientRequest;

/// An inbound socket frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HubFrame {
    pub event: HubRequestKind,
    #[serde(default)]
    pub data: ClientRequest,
}
