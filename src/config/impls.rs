pub mod cluster_mode;
pub mod configuration;
pub mod configuration_error;
pub mod event_bus_config;
