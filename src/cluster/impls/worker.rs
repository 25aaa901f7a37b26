use std::sync::{Arc, Weak};
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;
use crate::cluster::enums::link_error::LinkError;
use crate::cluster::enums::link_event::LinkEvent;
use crate::cluster::enums::message_type::MessageType;
use crate::cluster::structs::cluster_message::ClusterMessage;
use crate::cluster::structs::data_envelope::DataEnvelope;
use crate::cluster::structs::model_message::ModelMessage;
use crate::cluster::structs::sync_envelope::SyncEnvelope;
use crate::cluster::structs::transport_link::TransportLink;
use crate::cluster::structs::worker::Worker;
use crate::cluster::structs::worker_address::WorkerAddress;
use crate::common::common::current_time_millis;
use crate::config::structs::configuration::Configuration;

impl Worker {
    pub fn new(config: Arc<Configuration>) -> Result<(Arc<Worker>, mpsc::UnboundedReceiver<ModelMessage>), LinkError> {
        let (link, link_events) = TransportLink::new(&config.event_bus)?;
        let (inbound, receiver) = mpsc::unbounded_channel();
        let address = WorkerAddress {
            host: config.worker.host.clone(),
            port: config.worker.port,
            secure: config.worker.secure,
        };

        Ok((Arc::new(Worker {
            id: Self::generate_id(),
            config,
            link,
            link_events: Mutex::new(Some(link_events)),
            address: RwLock::new(address),
            load: Default::default(),
            inbound,
        }), receiver))
    }

    pub fn generate_id() -> String {
        format!("{}:{}:{}", std::process::id(), current_time_millis(), Uuid::new_v4().simple())
    }

    /// Spawns the link, its event loop and the load reporter. The handle resolves only
    /// when the link gives up.
    pub fn start(self: &Arc<Self>) -> JoinHandle<Result<(), LinkError>> {
        info!("[WORKER] Starting worker {}", self.id);
        if let Some(mut link_events) = self.link_events.lock().take() {
            let worker = Arc::downgrade(self);
            tokio::spawn(async move {
                while let Some(event) = link_events.recv().await {
                    let Some(node) = worker.upgrade() else { break; };
                    node.handle_link_event(event);
                }
            });
        }

        if self.config.worker.load_send_interval > 0 {
            tokio::spawn(Self::report_load(Arc::downgrade(self), Duration::from_millis(self.config.worker.load_send_interval)));
        }

        tokio::spawn(self.link.clone().run())
    }

    async fn report_load(worker: Weak<Worker>, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            let Some(node) = worker.upgrade() else { break; };
            if node.is_connected() {
                node.send_load();
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    pub fn link(&self) -> Arc<TransportLink> {
        self.link.clone()
    }

    pub(crate) fn handle_link_event(&self, event: LinkEvent) {
        match event {
            LinkEvent::Connected => {
                self.send_address();
                self.send_load();
            }
            LinkEvent::Disconnected => debug!("[WORKER] Link to master lost, records will be queued"),
            LinkEvent::Message(message) => self.handle_message(message),
        }
    }

    /// Forwards a `sync` or `data` record from another node to the models.
    pub(crate) fn handle_message(&self, message: ClusterMessage) {
        let Some(sender) = message.sender.clone() else {
            debug!("[WORKER] Dropping record without sender");
            return;
        };
        if sender == self.id {
            return;
        }
        let model_message = match message.message_type {
            MessageType::Sync => match serde_json::from_value::<SyncEnvelope>(message.value) {
                Ok(envelope) => ModelMessage {
                    message_type: MessageType::Sync,
                    sender,
                    model_name: Some(envelope.model_name),
                    data: envelope.data,
                },
                Err(e) => {
                    warn!("[WORKER] Invalid sync record from {}: {}", sender, e);
                    return;
                }
            },
            MessageType::Data => match serde_json::from_value::<DataEnvelope>(message.value) {
                Ok(envelope) => ModelMessage {
                    message_type: MessageType::Data,
                    sender,
                    model_name: envelope.model_name,
                    data: envelope.data,
                },
                Err(e) => {
                    warn!("[WORKER] Invalid data record from {}: {}", sender, e);
                    return;
                }
            },
            other => {
                debug!("[WORKER] Ignoring {:?} record from {}", other, sender);
                return;
            }
        };
        let _ = self.inbound.send(model_message);
    }

    pub fn send_sync_message(&self, model_name: &str, data: Value) -> Result<(), LinkError> {
        self.send_sync(model_name, None, data)
    }

    /// Like [`Worker::send_sync_message`], but the master relays it to `worker_id` only.
    pub fn send_sync_message_to(&self, model_name: &str, worker_id: &str, data: Value) -> Result<(), LinkError> {
        self.send_sync(model_name, Some(worker_id.to_string()), data)
    }

    fn send_sync(&self, model_name: &str, target: Option<String>, data: Value) -> Result<(), LinkError> {
        let envelope = SyncEnvelope {
            model_name: model_name.to_string(),
            target,
            data,
        };
        self.link.send(ClusterMessage::sync(&self.id, &envelope)?)
    }

    pub fn send_data_message(&self, model_name: Option<String>, service_name: Option<String>, data: Value) -> Result<(), LinkError> {
        let envelope = DataEnvelope {
            model_name,
            service_name,
            data,
        };
        self.link.send(ClusterMessage::data(&self.id, &envelope)?)
    }

    pub fn current_address(&self) -> WorkerAddress {
        self.address.read().clone()
    }

    /// Replaces the advertised address and reports it when connected.
    pub fn set_current_address(&self, address: WorkerAddress) {
        *self.address.write() = address;
        if self.is_connected() {
            self.send_address();
        }
    }

    pub fn load(&self) -> u64 {
        self.load.load(Ordering::SeqCst)
    }

    pub fn client_connected(&self) -> u64 {
        self.load.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn client_disconnected(&self) -> u64 {
        let previous = self.load.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |load| Some(load.saturating_sub(1)));
        previous.unwrap_or(0).saturating_sub(1)
    }

    fn send_address(&self) {
        let result = ClusterMessage::address(&self.current_address())
            .map_err(LinkError::from)
            .and_then(|message| self.link.send(message.with_sender(&self.id)));
        if let Err(e) = result {
            warn!("[WORKER] Failed to send address: {}", e);
        }
    }

    fn send_load(&self) {
        if let Err(e) = self.link.send(ClusterMessage::load(self.load()).with_sender(&self.id)) {
            warn!("[WORKER] Failed to send load: {}", e);
        }
    }
}
