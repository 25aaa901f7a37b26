use std::collections::HashMap;
use std::sync::{Arc, Weak};
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::cluster::enums::message_type::MessageType;
use crate::cluster::structs::model_message::ModelMessage;
use crate::cluster::structs::worker::Worker;
use crate::config::structs::configuration::Configuration;
use crate::mvc::enums::model_event::ModelEvent;
use crate::mvc::enums::mvc_error::MvcError;
use crate::mvc::structs::logic_set::LogicSet;
use crate::mvc::structs::model::Model;
use crate::mvc::structs::model_schema::ModelSchema;
use crate::mvc::structs::view_controller::ViewController;
use crate::mvc::traits::model_behavior::ModelBehavior;
use crate::storage::traits::storage_provider::StorageProvider;
use crate::viewhub::enums::hub_request::HubRequest;
use crate::viewhub::enums::hub_request_kind::HubRequestKind;
use crate::viewhub::impls::hub_state::ALL_VIEWS;
use crate::viewhub::structs::client_request::ClientRequest;
use crate::viewhub::structs::response_body::ResponseBody;
use crate::viewhub::structs::view_hub::ViewHub;

impl LogicSet {
    pub fn new(
        config: Arc<Configuration>,
        storage: Arc<dyn StorageProvider>,
        hub: Arc<ViewHub>,
        worker: Option<Arc<Worker>>,
    ) -> Arc<LogicSet> {
        Arc::new(LogicSet {
            config,
            storage,
            hub,
            worker,
            controllers: RwLock::new(HashMap::new()),
        })
    }

    /// Opens a model from the models collection and serves it under its own name.
    pub async fn register(self: &Arc<Self>, schema: ModelSchema, behavior: Arc<dyn ModelBehavior>) -> Result<Arc<Model>, MvcError> {
        let collection = self.storage.collection(&self.config.mvc.models_collection).await?;
        let model = Model::open(schema, collection).await?;
        let events = model.subscribe();
        let controller = Arc::new(ViewController::new(model.clone(), behavior));
        if self.controllers.write().insert(model.name().to_string(), controller).is_some() {
            warn!("[LOGIC] Model '{}' registered twice, replacing controller", model.name());
        }
        tokio::spawn(Self::model_events(Arc::downgrade(self), model.name().to_string(), events));
        info!("[LOGIC] Registered model '{}'", model.name());
        Ok(model)
    }

    pub fn controller(&self, view_name: &str) -> Option<Arc<ViewController>> {
        self.controllers.read().get(view_name).cloned()
    }

    pub fn model(&self, name: &str) -> Option<Arc<Model>> {
        self.controller(name).map(|controller| controller.model())
    }

    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.controllers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn hub(&self) -> Arc<ViewHub> {
        self.hub.clone()
    }

    /// Spawns the loops consuming hub requests and, on a worker, replicated records.
    /// Each view request runs in its own task and answers through the hub's correlation table.
    pub fn start(
        self: &Arc<Self>,
        hub_requests: mpsc::UnboundedReceiver<HubRequest>,
        cluster_messages: Option<mpsc::UnboundedReceiver<ModelMessage>>,
    ) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::new();

        let logic = Arc::downgrade(self);
        let mut hub_requests = hub_requests;
        handles.push(tokio::spawn(async move {
            while let Some(request) = hub_requests.recv().await {
                let Some(logic) = logic.upgrade() else {
                    break;
                };
                if matches!(request, HubRequest::View(..)) {
                    tokio::spawn(async move { logic.handle_hub_request(request).await });
                } else {
                    logic.handle_hub_request(request).await;
                }
            }
            debug!("[LOGIC] Hub request loop stopped");
        }));

        if let Some(mut cluster_messages) = cluster_messages {
            let logic = Arc::downgrade(self);
            handles.push(tokio::spawn(async move {
                while let Some(message) = cluster_messages.recv().await {
                    let Some(logic) = logic.upgrade() else {
                        break;
                    };
                    logic.route_cluster_message(message);
                }
                debug!("[LOGIC] Cluster message loop stopped");
            }));
        }

        handles
    }

    /// A `sync` record goes to the model it names. A `data` record goes to the named
    /// model, or to every model when it names none.
    pub fn route_cluster_message(&self, message: ModelMessage) {
        match message.message_type {
            MessageType::Sync => {
                let Some(model) = message.model_name.as_deref().and_then(|name| self.model(name)) else {
                    debug!("[LOGIC] Sync for unknown model {:?} dropped", message.model_name);
                    return;
                };
                model.sync_message_handler(&message.sender, &message.data);
            }
            MessageType::Data => match message.model_name.as_deref() {
                Some(name) => match self.model(name) {
                    Some(model) => model.data_message_handler(&message.sender, message.data),
                    None => debug!("[LOGIC] Data for unknown model '{}' dropped", name),
                },
                None => {
                    let controllers: Vec<Arc<ViewController>> = self.controllers.read().values().cloned().collect();
                    for controller in controllers {
                        controller.model.data_message_handler(&message.sender, message.data.clone());
                    }
                }
            },
            _ => {}
        }
    }

    pub async fn handle_hub_request(&self, request: HubRequest) {
        match request {
            HubRequest::ClientConnected(_) => {
                if let Some(worker) = &self.worker {
                    worker.client_connected();
                }
            }
            HubRequest::ClientDisconnected(_) => {
                if let Some(worker) = &self.worker {
                    worker.client_disconnected();
                }
            }
            HubRequest::View(kind, request) => {
                let body = match self.dispatch(kind, &request).await {
                    Ok(body) => body,
                    Err(e) => {
                        debug!("[LOGIC] {:?} failed: {}", kind, e);
                        ResponseBody::error(&e.to_string())
                    }
                };
                let session_id = request.session_id.as_deref().unwrap_or_default();
                let request_id = request.id.as_deref().unwrap_or_default();
                self.hub.send_response(request.view_name.as_deref(), body, session_id, request_id);
            }
        }
    }

    async fn dispatch(&self, kind: HubRequestKind, request: &ClientRequest) -> Result<ResponseBody, MvcError> {
        let session_id = request.session_id.as_deref().unwrap_or_default();
        let view_name = request.view_name.as_deref().unwrap_or_default();

        if kind == HubRequestKind::UnsubscribeRequest && view_name == ALL_VIEWS {
            self.hub.unsubscribe(ALL_VIEWS, session_id);
            return Ok(ResponseBody::ok());
        }
        let controller = self.controller(view_name).ok_or_else(|| MvcError::UnknownView(view_name.to_string()))?;

        match kind {
            HubRequestKind::ModelRequest => Ok(ResponseBody::with_model(controller.get_model(session_id).await?)),
            HubRequestKind::EditRequest => {
                let property_name = request.property_name.as_deref()
                    .ok_or_else(|| MvcError::InvalidRequest(String::from("propertyName is required")))?;
                let value = request.new_value.clone().unwrap_or(Value::Null);
                let changed = controller.set_value(property_name, value, session_id).await?;
                Ok(ResponseBody::with_result(Value::Bool(changed)))
            }
            HubRequestKind::InvokeRequest => {
                let method_name = request.method_name.as_deref()
                    .ok_or_else(|| MvcError::InvalidRequest(String::from("methodName is required")))?;
                Ok(ResponseBody::with_result(controller.invoke(method_name, request.args.clone(), session_id).await?))
            }
            HubRequestKind::SubscribeRequest => {
                controller.validate_access(session_id).await?;
                self.hub.subscribe(view_name, session_id);
                Ok(ResponseBody::ok())
            }
            HubRequestKind::UnsubscribeRequest => {
                self.hub.unsubscribe(view_name, session_id);
                Ok(ResponseBody::ok())
            }
        }
    }

    async fn model_events(logic: Weak<LogicSet>, model_name: String, mut events: mpsc::UnboundedReceiver<ModelEvent>) {
        while let Some(event) = events.recv().await {
            let Some(logic) = logic.upgrade() else {
                break;
            };
            match event {
                ModelEvent::Changed(change) => {
                    let Some(controller) = logic.controller(&model_name) else {
                        continue;
                    };
                    for session_id in logic.hub.subscribers(&model_name) {
                        if controller.can_observe(&change.property_name, &session_id).await {
                            logic.hub.send_new_value(
                                &model_name,
                                &change.property_name,
                                change.old_value.clone(),
                                change.new_value.clone(),
                                &session_id,
                            );
                        }
                    }
                }
                ModelEvent::SendSync(sync) => {
                    let Some(worker) = &logic.worker else {
                        continue;
                    };
                    let result = serde_json::to_value(&sync)
                        .map_err(|e| e.to_string())
                        .and_then(|data| worker.send_sync_message(&model_name, data).map_err(|e| e.to_string()));
                    if let Err(e) = result {
                        error!("[LOGIC] Failed to replicate '{}.{}': {}", model_name, sync.property_name, e);
                    }
                }
                ModelEvent::Data { sender, .. } => debug!("[LOGIC] Model '{}' received data from {}", model_name, sender),
                ModelEvent::Error(e) => error!("[LOGIC] Model '{}' reported: {}", model_name, e),
                _ => {}
            }
        }
        debug!("[LOGIC] Event loop of model '{}' stopped", model_name);
    }
}
