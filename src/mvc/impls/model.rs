use std::sync::Arc;
use log::{debug, error, info};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc;
use crate::mvc::enums::model_event::ModelEvent;
use crate::mvc::enums::mvc_error::MvcError;
use crate::mvc::enums::set_mode::SetMode;
use crate::mvc::structs::model::Model;
use crate::mvc::structs::model_schema::ModelSchema;
use crate::mvc::structs::property::Property;
use crate::mvc::structs::property_change::PropertyChange;
use crate::mvc::structs::sync_message::SyncMessage;
use crate::storage::storage::filter_by;
use crate::storage::traits::document_collection::DocumentCollection;
use crate::storage::types::Document;

impl Model {
    /// Loads the model document, seeding it from the schema defaults when absent.
    pub async fn open(schema: ModelSchema, storage: Arc<dyn DocumentCollection>) -> Result<Arc<Model>, MvcError> {
        let model = Model {
            name: schema.name,
            properties: schema.properties.into_iter()
                .map(|(name, value)| Property::new(&name, value))
                .collect(),
            storage,
            listeners: Mutex::new(Vec::new()),
        };

        match model.storage.find_one(&filter_by("name", model.name.as_str())).await? {
            None => {
                model.storage.insert(model.serialize()).await?;
                info!("[MODEL] Seeded model '{}'", model.name);
            }
            Some(document) => {
                model.deserialize(&document, SetMode::Silent);
                debug!("[MODEL] Loaded model '{}'", model.name);
            }
        }
        model.emit(ModelEvent::Loaded);
        Ok(Arc::new(model))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_names(&self) -> Vec<String> {
        self.properties.iter().map(|property| property.name.clone()).collect()
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.property(name).map(Property::get)
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<ModelEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.listeners.lock().push(sender);
        receiver
    }

    /// A local edit: emits `Changed` and `SendSync`, then persists.
    ///
    /// Returns `false` when the value was already current. A storage failure emits
    /// `Error` and is returned; the in-memory value is kept.
    pub async fn set(&self, name: &str, value: Value) -> Result<bool, MvcError> {
        let Some(change) = self.apply(name, value, SetMode::Replicate)? else {
            return Ok(false);
        };
        self.persist(&change.property_name, change.new_value).await?;
        Ok(true)
    }

    /// Updates a property in memory, emitting the events `mode` calls for. Never persists.
    pub fn apply(&self, name: &str, value: Value, mode: SetMode) -> Result<Option<PropertyChange>, MvcError> {
        let property = self.property(name).ok_or_else(|| MvcError::UnknownProperty(name.to_string()))?;
        let Some(old_value) = property.set(value.clone()) else {
            return Ok(None);
        };
        let change = PropertyChange {
            property_name: name.to_string(),
            old_value,
            new_value: value,
            sync_required: mode == SetMode::Replicate,
        };
        match mode {
            SetMode::Silent => {}
            SetMode::Observe => self.emit(ModelEvent::Changed(change.clone())),
            SetMode::Replicate => {
                self.emit(ModelEvent::Changed(change.clone()));
                self.emit(ModelEvent::SendSync(SyncMessage {
                    model_name: self.name.clone(),
                    property_name: change.property_name.clone(),
                    old_value: change.old_value.clone(),
                    new_value: change.new_value.clone(),
                }));
            }
        }
        Ok(Some(change))
    }

    /// `name` followed by every property, in declaration order.
    pub fn serialize(&self) -> Document {
        let mut document = Document::new();
        document.insert(String::from("name"), Value::String(self.name.clone()));
        for property in &self.properties {
            document.insert(property.name.clone(), property.get());
        }
        document
    }

    /// Applies every known property present in `document`; other keys are ignored.
    pub fn deserialize(&self, document: &Document, mode: SetMode) {
        for property in &self.properties {
            if let Some(value) = document.get(&property.name) {
                let _ = self.apply(&property.name, value.clone(), mode);
            }
        }
    }

    /// Applies a replicated change from another worker. Returns `true` if a value changed.
    pub fn sync_message_handler(&self, sender: &str, data: &Value) -> bool {
        let message: SyncMessage = match serde_json::from_value(data.clone()) {
            Ok(message) => message,
            Err(e) => {
                debug!("[MODEL] Ignoring malformed sync from {}: {}", sender, e);
                return false;
            }
        };
        if message.model_name != self.name || !self.has_property(&message.property_name) {
            return false;
        }
        matches!(self.apply(&message.property_name, message.new_value, SetMode::Observe), Ok(Some(_)))
    }

    pub fn data_message_handler(&self, sender: &str, data: Value) {
        self.emit(ModelEvent::Data {
            sender: sender.to_string(),
            data,
        });
    }

    /// Writes the whole model over its document.
    pub async fn save(&self) -> Result<(), MvcError> {
        let document = self.serialize();
        if let Err(e) = self.store(&document).await {
            self.emit(ModelEvent::Error(e.to_string()));
            return Err(e);
        }
        self.emit(ModelEvent::Saved);
        Ok(())
    }

    async fn persist(&self, name: &str, value: Value) -> Result<(), MvcError> {
        let mut set = Document::new();
        set.insert(name.to_string(), value.clone());
        if let Err(e) = self.store(&set).await {
            error!("[MODEL] Failed to persist '{}.{}': {}", self.name, name, e);
            self.emit(ModelEvent::Error(e.to_string()));
            return Err(e);
        }
        self.emit(ModelEvent::PropertySaved {
            property_name: name.to_string(),
            value,
        });
        Ok(())
    }

    async fn store(&self, set: &Document) -> Result<(), MvcError> {
        let filter = filter_by("name", self.name.as_str());
        if !self.storage.update(&filter, set).await? {
            self.storage.insert(self.serialize()).await?;
        }
        Ok(())
    }

    fn emit(&self, event: ModelEvent) {
        self.listeners.lock().retain(|listener| listener.send(event.clone()).is_ok());
    }
}
