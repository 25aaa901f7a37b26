use crate::viewhub::enums::hub_request_kind::HubRequestKind;
use crate::viewhub::structs::client_request::ClientRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum HubRequest {
    ClientConnected(u64),
    ClientDisconnected(u64),
    /// A normalized request; `id` and `session_id` are always set.
    View(HubRequestKind, ClientRequest),
}
