use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_rustls::TlsAcceptor;
use crate::cluster::encoding::encoder::encode_frame;
use crate::cluster::enums::link_error::LinkError;
use crate::cluster::enums::master_event::MasterEvent;
use crate::cluster::master::server::event_bus_service;
use crate::cluster::structs::cluster_message::ClusterMessage;
use crate::cluster::structs::data_envelope::DataEnvelope;
use crate::cluster::structs::master::Master;
use crate::cluster::structs::master_state::MasterState;
use crate::cluster::structs::worker_address::WorkerAddress;
use crate::cluster::traits::event_service::EventService;
use crate::cluster::types::{FrameSender, WorkerId};
use crate::config::structs::configuration::Configuration;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl Master {
    pub fn new(config: Arc<Configuration>) -> Result<Arc<Master>, LinkError> {
        let tls_acceptor = if config.event_bus.ssl {
            let bundle = CertificateBundle::load_from_files(&config.event_bus.ssl_cert, &config.event_bus.ssl_key)?;
            info!("[MASTER] Loaded event bus certificate from {}", bundle.cert_path);
            Some(TlsAcceptor::from(Arc::new(bundle.server_config()?)))
        } else {
            None
        };
        let (events, _) = broadcast::channel(1024);

        Ok(Arc::new(Master {
            config,
            state: Mutex::new(MasterState::new()),
            services: RwLock::new(Default::default()),
            events,
            tls_acceptor,
        }))
    }

    /// Binds the event bus listener and spawns the accept loop.
    pub async fn start(self: &Arc<Self>) -> Result<(SocketAddr, JoinHandle<()>), LinkError> {
        let listener = TcpListener::bind(self.config.event_bus.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("[MASTER] Event bus listening on {} (tls: {})", local_addr, self.tls_acceptor.is_some());
        let handle = tokio::spawn(event_bus_service(self.clone(), listener));
        Ok((local_addr, handle))
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<MasterEvent> {
        self.events.subscribe()
    }

    pub fn register_service(&self, service: Arc<dyn EventService>) {
        let name = service.name().to_string();
        info!("[MASTER] Registered event service '{}'", name);
        self.services.write().insert(name, service);
    }

    pub fn service(&self, name: &str) -> Option<Arc<dyn EventService>> {
        self.services.read().get(name).cloned()
    }

    pub fn worker_count(&self) -> usize {
        self.state.lock().workers.len()
    }

    pub fn authorized_workers(&self) -> Vec<WorkerId> {
        self.state.lock().authorized_ids()
    }

    pub fn worker_address(&self, worker_id: &str) -> Option<WorkerAddress> {
        self.state.lock().workers.get(worker_id).and_then(|record| record.address.clone())
    }

    pub fn worker_weight(&self, worker_id: &str) -> Option<u64> {
        self.state.lock().balancer.weight(worker_id)
    }

    /// Address of the least-loaded authorized worker, if it has announced one.
    pub fn free_worker(&self) -> Option<WorkerAddress> {
        let state = self.state.lock();
        let worker_id = state.balancer.get_worker()?;
        state.workers.get(&worker_id).and_then(|record| record.address.clone())
    }

    /// Stamps the master secret and sends to one worker, or to every authorized worker when
    /// `worker_id` is `None`. Returns how many workers the record was queued for.
    pub fn send_to_worker(&self, message: ClusterMessage, worker_id: Option<&str>) -> Result<usize, LinkError> {
        let frame = encode_frame(&message.stamped(&self.config.event_bus.master_secret))?;
        let state = self.state.lock();
        let delivered = match worker_id {
            Some(id) => match state.workers.get(id) {
                Some(record) if record.authorized => usize::from(record.sender.send(frame).is_ok()),
                _ => {
                    debug!("[MASTER] Dropping record for unknown or unauthorized worker {}", id);
                    0
                }
            },
            None => state.workers.values()
                .filter(|record| record.authorized)
                .filter(|record| record.sender.send(frame.clone()).is_ok())
                .count(),
        };
        Ok(delivered)
    }

    /// Relays a record to every authorized worker except `origin`.
    pub fn broadcast_except(&self, message: ClusterMessage, origin: &str) -> Result<usize, LinkError> {
        let frame = encode_frame(&message.stamped(&self.config.event_bus.master_secret))?;
        let state = self.state.lock();
        Ok(state.workers.values()
            .filter(|record| record.authorized && record.id != origin)
            .filter(|record| record.sender.send(frame.clone()).is_ok())
            .count())
    }

    /// Sends service output to the least-loaded worker. Returns `false` when no worker is available.
    pub fn publish_service_data(&self, service_name: &str, model_name: Option<String>, data: Value) -> Result<bool, LinkError> {
        let target = self.state.lock().balancer.get_worker();
        let Some(worker_id) = target else {
            warn!("[MASTER] No worker available for data from service '{}'", service_name);
            return Ok(false);
        };
        let envelope = DataEnvelope {
            model_name,
            service_name: None,
            data,
        };
        let message = ClusterMessage::data(service_name, &envelope)?;
        Ok(self.send_to_worker(message, Some(&worker_id))? > 0)
    }

    pub(crate) fn add_connection(&self, worker_id: &str, sender: FrameSender) {
        self.state.lock().add_connection(worker_id, sender);
        debug!("[MASTER] Worker link opened: {}", worker_id);
    }

    pub(crate) fn authorize(&self, worker_id: &str) {
        if self.state.lock().authorize(worker_id) {
            info!("[MASTER] Worker connected: {}", worker_id);
            let _ = self.events.send(MasterEvent::WorkerConnected(worker_id.to_string()));
        }
    }

    pub(crate) fn remove_worker(&self, worker_id: &str) {
        let removed = self.state.lock().remove(worker_id);
        if let Some(record) = removed {
            let uptime = chrono::Utc::now() - record.connected_at;
            info!("[MASTER] Worker disconnected: {} (connected for {}s)", worker_id, uptime.num_seconds());
            let _ = self.events.send(MasterEvent::WorkerDisconnected(worker_id.to_string()));
        }
    }
}
