use std::time::Duration;
use crate::config::structs::event_bus_config::EventBusConfig;

impl EventBusConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_interval)
    }

    pub fn server_name(&self) -> &str {
        if self.ssl_server_name.is_empty() {
            return self.host.as_str();
        }
        self.ssl_server_name.as_str()
    }
}
