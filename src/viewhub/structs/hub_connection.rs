use std::collections::HashSet;
use tokio::sync::mpsc;
use crate::viewhub::enums::client_event::ClientEvent;

#[derive(Debug)]
pub struct HubConnection {
    pub sender: mpsc::UnboundedSender<ClientEvent>,
    /// Every session a request on this socket has used.
    pub session_ids: HashSet<String>,
}
