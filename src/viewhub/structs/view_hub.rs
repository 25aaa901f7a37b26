use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use crate::sessions::structs::session_manager::SessionManager;
use crate::viewhub::enums::hub_request::HubRequest;
use crate::viewhub::structs::hub_state::HubState;

pub struct ViewHub {
    pub(crate) sessions: Arc<SessionManager>,
    pub(crate) state: Mutex<HubState>,
    pub(crate) requests: mpsc::UnboundedSender<HubRequest>,
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) next_connection: AtomicU64,
}
