#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use neutrino::cluster::enums::link_error::LinkError;
use neutrino::cluster::enums::master_event::MasterEvent;
use neutrino::cluster::structs::master::Master;
use neutrino::cluster::structs::model_message::ModelMessage;
use neutrino::cluster::structs::worker::Worker;
use neutrino::cluster::traits::event_service::EventService;
use neutrino::config::structs::configuration::Configuration;

pub type TestConfig = Arc<Configuration>;

pub const WAIT: Duration = Duration::from_secs(5);

/// Master bound to an ephemeral port on loopback.
pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.event_bus.host = "127.0.0.1".to_string();
    config.event_bus.port = 0;
    config.event_bus.reconnect_interval = 50;
    config.worker.load_send_interval = 0;
    config
}

/// Worker configuration pointing at a running master.
pub fn create_worker_config(master: &Configuration, bus: SocketAddr, client_port: u16) -> TestConfig {
    let mut config = master.clone();
    config.event_bus.port = bus.port();
    config.worker.host = "127.0.0.1".to_string();
    config.worker.port = client_port;
    Arc::new(config)
}

pub async fn start_master(config: Configuration) -> (Arc<Master>, SocketAddr, broadcast::Receiver<MasterEvent>) {
    let master = Master::new(Arc::new(config)).unwrap();
    let events = master.subscribe_events();
    let (address, _) = master.start().await.unwrap();
    (master, address, events)
}

pub struct TestWorker {
    pub worker: Arc<Worker>,
    pub inbound: mpsc::UnboundedReceiver<ModelMessage>,
    pub handle: JoinHandle<Result<(), LinkError>>,
}

pub async fn start_worker(config: TestConfig) -> TestWorker {
    let (worker, inbound) = Worker::new(config).unwrap();
    let handle = worker.start();
    TestWorker { worker, inbound, handle }
}

pub async fn wait_for_connected(events: &mut broadcast::Receiver<MasterEvent>) -> String {
    loop {
        match tokio::time::timeout(WAIT, events.recv()).await.unwrap().unwrap() {
            MasterEvent::WorkerConnected(id) => return id,
            _ => continue,
        }
    }
}

pub async fn wait_for_disconnected(events: &mut broadcast::Receiver<MasterEvent>) -> String {
    loop {
        match tokio::time::timeout(WAIT, events.recv()).await.unwrap().unwrap() {
            MasterEvent::WorkerDisconnected(id) => return id,
            _ => continue,
        }
    }
}

/// Polls `condition` until it holds or the wait elapses.
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    let deadline = tokio::time::Instant::now() + WAIT;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

pub async fn next_inbound(inbound: &mut mpsc::UnboundedReceiver<ModelMessage>) -> ModelMessage {
    tokio::time::timeout(WAIT, inbound.recv()).await.unwrap().unwrap()
}

#[derive(Default)]
pub struct RecordingService {
    pub received: Mutex<Vec<(String, Option<String>, Value)>>,
}

#[async_trait]
impl EventService for RecordingService {
    fn name(&self) -> &str {
        "recorder"
    }

    async fn handle_data(&self, sender: &str, model_name: Option<String>, data: Value) {
        self.received.lock().push((sender.to_string(), model_name, data));
    }
}
