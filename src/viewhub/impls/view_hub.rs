use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::{debug, warn};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc;
use uuid::Uuid;
use crate::sessions::structs::session_manager::SessionManager;
use crate::storage::types::Document;
use crate::viewhub::enums::client_event::ClientEvent;
use crate::viewhub::enums::hub_error::HubError;
use crate::viewhub::enums::hub_request::HubRequest;
use crate::viewhub::enums::hub_request_kind::HubRequestKind;
use crate::viewhub::structs::client_request::ClientRequest;
use crate::viewhub::structs::client_response::ClientResponse;
use crate::viewhub::structs::hub_connection::HubConnection;
use crate::viewhub::structs::hub_state::HubState;
use crate::viewhub::structs::new_value::NewValue;
use crate::viewhub::structs::pending_request::PendingRequest;
use crate::viewhub::structs::response_body::ResponseBody;
use crate::viewhub::structs::view_hub::ViewHub;

pub const REQUEST_TIMED_OUT: &str = "Request timed out";

impl ViewHub {
    /// `request_timeout` of zero disables request timeouts.
    pub fn new(sessions: Arc<SessionManager>, request_timeout: Duration) -> (Arc<ViewHub>, mpsc::UnboundedReceiver<HubRequest>) {
        let (requests, receiver) = mpsc::unbounded_channel();
        (Arc::new(ViewHub {
            sessions,
            state: Mutex::new(HubState::default()),
            requests,
            request_timeout: (!request_timeout.is_zero()).then_some(request_timeout),
            next_connection: Default::default(),
        }), receiver)
    }

    pub fn sessions(&self) -> Arc<SessionManager> {
        self.sessions.clone()
    }

    pub fn connect(&self) -> (u64, mpsc::UnboundedReceiver<ClientEvent>) {
        let connection_id = self.next_connection.fetch_add(1, Ordering::SeqCst) + 1;
        let (sender, receiver) = mpsc::unbounded_channel();
        self.state.lock().connections.insert(connection_id, HubConnection {
            sender,
            session_ids: Default::default(),
        });
        debug!("[VIEWHUB] Client {} connected", connection_id);
        let _ = self.requests.send(HubRequest::ClientConnected(connection_id));
        (connection_id, receiver)
    }

    /// Drops the connection, its pending requests and the subscriptions of sessions no other
    /// connection still uses.
    pub fn disconnect(&self, connection_id: u64) {
        let removed = {
            let mut state = self.state.lock();
            let orphaned = state.exclusive_sessions(connection_id);
            let removed = state.connections.remove(&connection_id).is_some();
            state.pending.retain(|_, pending| pending.connection_id != connection_id);
            for session_id in orphaned {
                state.unsubscribe(crate::viewhub::impls::hub_state::ALL_VIEWS, &session_id);
            }
            removed
        };
        if removed {
            debug!("[VIEWHUB] Client {} disconnected", connection_id);
            let _ = self.requests.send(HubRequest::ClientDisconnected(connection_id));
        }
    }

    /// Normalizes a request, registers it as pending and forwards it to the application.
    /// Returns the request id the response will carry.
    pub async fn handle_request(self: &Arc<Self>, connection_id: u64, kind: HubRequestKind, mut request: ClientRequest) -> Result<String, HubError> {
        let session_id = self.normalize_session(request.session_id.as_deref()).await?;
        request.session_id = Some(session_id.clone());

        let request_id = {
            let mut state = self.state.lock();
            let Some(connection) = state.connections.get_mut(&connection_id) else {
                return Err(HubError::ConnectionClosed(connection_id));
            };
            connection.session_ids.insert(session_id);

            let mut request_id = request.id.clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(Self::generate_request_id);
            if state.pending.contains_key(&request_id) {
                warn!("[VIEWHUB] Request id {} already pending, assigning a new one", request_id);
                request_id = Self::generate_request_id();
            }
            request.id = Some(request_id.clone());
            state.pending.insert(request_id.clone(), PendingRequest {
                connection_id,
                kind,
                request: request.clone(),
            });
            request_id
        };

        if let Some(timeout) = self.request_timeout {
            let hub = Arc::downgrade(self);
            let expiring = request_id.clone();
            tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                if let Some(hub) = hub.upgrade() {
                    hub.expire_request(&expiring);
                }
            });
        }

        if self.requests.send(HubRequest::View(kind, request)).is_err() {
            warn!("[VIEWHUB] No application attached, rejecting request {}", request_id);
            self.answer(&request_id, ResponseBody::error("Service unavailable"));
        }
        Ok(request_id)
    }

    async fn normalize_session(&self, session_id: Option<&str>) -> Result<String, HubError> {
        if let Some(session) = self.sessions.set(session_id, Document::new()).await? {
            return Ok(session.sid);
        }
        Ok(self.sessions.create(Document::new()).await?.sid)
    }

    fn generate_request_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Answers a pending request on the socket that sent it. Returns `false` if it was
    /// already answered, timed out, or its socket closed.
    pub fn send_response(&self, view_name: Option<&str>, body: ResponseBody, session_id: &str, request_id: &str) -> bool {
        let mut state = self.state.lock();
        let Some(pending) = state.pending.remove(request_id) else {
            debug!("[VIEWHUB] No pending request {}, dropping response", request_id);
            return false;
        };
        let response = ClientResponse {
            request_id: request_id.to_string(),
            session_id: session_id.to_string(),
            view_name: view_name.map(str::to_string).or_else(|| pending.request.view_name.clone()),
            response_body: body,
            request: pending.request,
        };
        match state.connections.get(&pending.connection_id) {
            Some(connection) => connection.sender.send(pending.kind.response_event(response)).is_ok(),
            None => false,
        }
    }

    fn answer(&self, request_id: &str, body: ResponseBody) -> bool {
        let session_id = {
            let state = self.state.lock();
            match state.pending.get(request_id) {
                None => return false,
                Some(pending) => pending.request.session_id.clone().unwrap_or_default(),
            }
        };
        self.send_response(None, body, &session_id, request_id)
    }

    pub(crate) fn expire_request(&self, request_id: &str) {
        if self.answer(request_id, ResponseBody::error(REQUEST_TIMED_OUT)) {
            debug!("[VIEWHUB] Request {} timed out", request_id);
        }
    }

    /// Pushes a changed value to every socket bound to `session_id`. Returns how many sockets got it.
    pub fn send_new_value(&self, view_name: &str, property_name: &str, old_value: Value, new_value: Value, session_id: &str) -> usize {
        let event = ClientEvent::NewValue(NewValue {
            view_name: view_name.to_string(),
            property_name: property_name.to_string(),
            old_value,
            new_value,
            session_id: session_id.to_string(),
        });
        let state = self.state.lock();
        state.connections.values()
            .filter(|connection| connection.session_ids.contains(session_id))
            .filter(|connection| connection.sender.send(event.clone()).is_ok())
            .count()
    }

    pub fn subscribe(&self, view_name: &str, session_id: &str) -> bool {
        self.state.lock().subscribe(view_name, session_id)
    }

    pub fn unsubscribe(&self, view_name: &str, session_id: &str) -> usize {
        self.state.lock().unsubscribe(view_name, session_id)
    }

    pub fn subscribers(&self, view_name: &str) -> Vec<String> {
        let state = self.state.lock();
        let mut subscribers: Vec<String> = state.subscriptions.get(view_name)
            .map(|sessions| sessions.iter().cloned().collect())
            .unwrap_or_default();
        subscribers.sort();
        subscribers
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    pub fn connection_count(&self) -> usize {
        self.state.lock().connections.len()
    }

    pub fn connection_sessions(&self, connection_id: u64) -> Vec<String> {
        let state = self.state.lock();
        let mut sessions: Vec<String> = state.connections.get(&connection_id)
            .map(|connection| connection.session_ids.iter().cloned().collect())
            .unwrap_or_default();
        sessions.sort();
        sessions
    }
}
