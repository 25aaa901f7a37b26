use log::{debug, warn};
use serde_json::Value;
use crate::cluster::enums::message_type::MessageType;
use crate::cluster::structs::cluster_message::ClusterMessage;
use crate::cluster::structs::data_envelope::DataEnvelope;
use crate::cluster::structs::master::Master;
use crate::cluster::structs::worker_address::WorkerAddress;

impl Master {
    /// Dispatches an authenticated record from `worker_id`.
    pub async fn handle_message(&self, worker_id: &str, message: ClusterMessage) {
        match message.message_type {
            MessageType::Address => self.handle_address(worker_id, message),
            MessageType::Load => self.handle_load(worker_id, message),
            MessageType::Sync => self.handle_sync(worker_id, message),
            MessageType::Data => self.handle_data(worker_id, message).await,
            MessageType::Unknown => {
                debug!("[MASTER] Dropping record of unknown type from {}", worker_id);
            }
        }
    }

    fn handle_address(&self, worker_id: &str, message: ClusterMessage) {
        let address: WorkerAddress = match serde_json::from_value(message.value) {
            Ok(address) => address,
            Err(e) => {
                warn!("[MASTER] Invalid address from {}: {}", worker_id, e);
                return;
            }
        };
        debug!("[MASTER] Worker {} serves clients on {}", worker_id, address);
        if let Some(record) = self.state.lock().workers.get_mut(worker_id) {
            record.address = Some(address);
        }
    }

    fn handle_load(&self, worker_id: &str, message: ClusterMessage) {
        let weight = match message.value.as_u64().or_else(|| message.value.as_f64().map(|load| load.max(0.0).round() as u64)) {
            Some(weight) => weight,
            None => {
                warn!("[MASTER] Invalid load from {}: {}", worker_id, message.value);
                return;
            }
        };
        self.state.lock().set_weight(worker_id, weight);
    }

    fn handle_sync(&self, worker_id: &str, message: ClusterMessage) {
        let target = message.value.get("target").and_then(Value::as_str).map(str::to_string);
        let relayed = match target.as_deref() {
            Some(target) if target != worker_id => self.send_to_worker(message, Some(target)),
            Some(_) => Ok(0),
            None => self.broadcast_except(message, worker_id),
        };
        match relayed {
            Ok(count) => debug!("[MASTER] Relayed sync from {} to {} worker(s)", worker_id, count),
            Err(e) => warn!("[MASTER] Failed to relay sync from {}: {}", worker_id, e),
        }
    }

    async fn handle_data(&self, worker_id: &str, message: ClusterMessage) {
        let envelope: DataEnvelope = match serde_json::from_value(message.value) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("[MASTER] Invalid data record from {}: {}", worker_id, e);
                return;
            }
        };
        let Some(service_name) = envelope.service_name else {
            debug!("[MASTER] Data record from {} names no service, dropping", worker_id);
            return;
        };
        match self.service(&service_name) {
            None => debug!("[MASTER] No event service '{}', dropping data from {}", service_name, worker_id),
            Some(service) => {
                let sender = message.sender.unwrap_or_else(|| worker_id.to_string());
                service.handle_data(&sender, envelope.model_name, envelope.data).await;
            }
        }
    }
}
