use std::sync::Arc;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use crate::mvc::enums::model_event::ModelEvent;
use crate::mvc::structs::property::Property;
use crate::storage::traits::document_collection::DocumentCollection;

pub struct Model {
    pub(crate) name: String,
    pub(crate) properties: Vec<Property>,
    pub(crate) storage: Arc<dyn DocumentCollection>,
    pub(crate) listeners: Mutex<Vec<mpsc::UnboundedSender<ModelEvent>>>,
}
