use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;
use tokio_rustls::TlsAcceptor;
use crate::cluster::enums::master_event::MasterEvent;
use crate::cluster::structs::master_state::MasterState;
use crate::cluster::traits::event_service::EventService;
use crate::config::structs::configuration::Configuration;

pub struct Master {
    pub config: Arc<Configuration>,
    pub(crate) state: Mutex<MasterState>,
    pub(crate) services: RwLock<HashMap<String, Arc<dyn EventService>>>,
    pub(crate) events: broadcast::Sender<MasterEvent>,
    pub(crate) tls_acceptor: Option<TlsAcceptor>,
}
