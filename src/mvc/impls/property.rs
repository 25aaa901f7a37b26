use serde_json::Value;
use tokio::sync::watch;
use crate::mvc::structs::property::Property;

impl Property {
    pub fn new(name: &str, value: Value) -> Property {
        let (cell, _) = watch::channel(value);
        Property {
            name: name.to_string(),
            cell,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> Value {
        self.cell.borrow().clone()
    }

    /// Stores `value` and returns the previous one, or `None` when nothing changed.
    pub fn set(&self, value: Value) -> Option<Value> {
        let mut previous = None;
        self.cell.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            previous = Some(std::mem::replace(current, value));
            true
        });
        previous
    }

    pub fn watch(&self) -> watch::Receiver<Value> {
        self.cell.subscribe()
    }
}
