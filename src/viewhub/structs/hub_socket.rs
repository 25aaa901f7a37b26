use std::sync::Arc;
use crate::viewhub::structs::view_hub::ViewHub;

/// One client WebSocket, registered with the hub for its lifetime.
pub struct HubSocket {
    pub(crate) hub: Arc<ViewHub>,
    pub(crate) connection_id: Option<u64>,
}
