use serde::{Deserialize, Serialize};
use crate::config::enums::database_engine::DatabaseEngine;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub engine: DatabaseEngine,
    /// SQLite DSN, e.g. `sqlite://data.db`. Ignored by the memory engine.
    pub path: String,
}
