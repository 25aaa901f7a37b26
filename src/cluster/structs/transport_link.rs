use parking_lot::Mutex;
use rustls::pki_types::ServerName;
use tokio::sync::mpsc;
use tokio_rustls::TlsConnector;
use crate::cluster::enums::link_event::LinkEvent;
use crate::cluster::structs::link_state::LinkState;
use crate::config::structs::event_bus_config::EventBusConfig;

pub struct TransportLink {
    pub config: EventBusConfig,
    pub(crate) connector: Option<(TlsConnector, ServerName<'static>)>,
    pub(crate) state: Mutex<LinkState>,
    pub(crate) events: mpsc::UnboundedSender<LinkEvent>,
}
