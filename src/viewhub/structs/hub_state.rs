use std::collections::{HashMap, HashSet};
use crate::viewhub::structs::hub_connection::HubConnection;
use crate::viewhub::structs::pending_request::PendingRequest;

#[derive(Debug, Default)]
pub struct HubState {
    pub connections: HashMap<u64, HubConnection>,
    /// Keyed by request id; each entry is answered at most once.
    pub pending: HashMap<String, PendingRequest>,
    /// View name to subscribed session ids.
    pub subscriptions: HashMap<String, HashSet<String>>,
}
