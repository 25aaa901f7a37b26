/// Which role this process plays in the cluster.
pub mod cluster_mode;

/// Errors raised while reading, parsing or validating configuration.
pub mod configuration_error;

/// Document storage backends.
pub mod database_engine;
