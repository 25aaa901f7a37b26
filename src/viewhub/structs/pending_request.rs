use crate::viewhub::enums::hub_request_kind::HubRequestKind;
use crate::viewhub::structs::client_request::ClientRequest;

#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub connection_id: u64,
    pub kind: HubRequestKind,
    pub request: ClientRequest,
}
