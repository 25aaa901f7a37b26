use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use crate::cluster::enums::link_event::LinkEvent;
use crate::cluster::structs::model_message::ModelMessage;
use crate::cluster::structs::transport_link::TransportLink;
use crate::cluster::structs::worker_address::WorkerAddress;
use crate::config::structs::configuration::Configuration;

pub struct Worker {
    /// `<pid>:<unix millis>:<random>`, unique per process start.
    pub id: String,
    pub config: Arc<Configuration>,
    pub(crate) link: Arc<TransportLink>,
    pub(crate) link_events: Mutex<Option<mpsc::UnboundedReceiver<LinkEvent>>>,
    pub(crate) address: RwLock<WorkerAddress>,
    pub(crate) load: AtomicU64,
    pub(crate) inbound: mpsc::UnboundedSender<ModelMessage>,
}
