use serde_json::Value;
use tokio::sync::watch;

/// A named value cell. Watchers see every distinct value it takes.
#[derive(Debug)]
pub struct Property {
    pub(crate) name: String,
    pub(crate) cell: watch::Sender<Value>,
}
