use serde::{Deserialize, Serialize};
use crate::config::enums::cluster_mode::ClusterMode;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::event_bus_config::EventBusConfig;
use crate::config::structs::master_config::MasterConfig;
use crate::config::structs::mvc_config::MvcConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::sessions_config::SessionsConfig;
use crate::config::structs::worker_config::WorkerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub cluster_mode: ClusterMode,
    pub event_bus: EventBusConfig,
    pub master: MasterConfig,
    pub worker: WorkerConfig,
    pub mvc: MvcConfig,
    pub sessions: SessionsConfig,
    pub database: DatabaseConfig,
    pub sentry_config: SentryConfig,
}
