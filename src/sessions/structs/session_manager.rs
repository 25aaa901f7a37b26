use std::sync::Arc;
use std::time::Duration;
use crate::storage::traits::document_collection::DocumentCollection;

pub struct SessionManager {
    pub(crate) collection: Arc<dyn DocumentCollection>,
    pub(crate) lifetime: Duration,
}
