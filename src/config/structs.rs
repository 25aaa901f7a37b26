//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Master/worker event bus settings.
pub mod event_bus_config;

/// Master discovery endpoint settings.
pub mod master_config;

/// Worker client-facing settings.
pub mod worker_config;

/// Model storage and view hub settings.
pub mod mvc_config;

/// Session lifetime settings.
pub mod sessions_config;

/// Document storage connection configuration.
pub mod database_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
