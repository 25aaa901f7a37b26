use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::cluster::structs::worker::Worker;
use crate::config::structs::configuration::Configuration;
use crate::mvc::structs::view_controller::ViewController;
use crate::storage::traits::storage_provider::StorageProvider;
use crate::viewhub::structs::view_hub::ViewHub;

pub struct LogicSet {
    pub config: Arc<Configuration>,
    pub(crate) storage: Arc<dyn StorageProvider>,
    pub(crate) hub: Arc<ViewHub>,
    pub(crate) worker: Option<Arc<Worker>>,
    pub(crate) controllers: RwLock<HashMap<String, Arc<ViewController>>>,
}
