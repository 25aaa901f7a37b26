//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the node configuration
//! from TOML files. The same file drives both roles; `cluster_mode` picks
//! which sections are used at runtime.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **event_bus**: Master/worker link address, shared secrets, reconnect and TLS settings
//! - **master**: Discovery HTTP endpoint
//! - **worker**: Publicly advertised client address and load reporting
//! - **mvc**: Model collection and view hub request timeout
//! - **sessions**: Session collection, lifetime and expiry sweep
//! - **database**: Document storage engine
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use neutrino::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! let defaults = Configuration::init();
//! ```

/// Configuration enumerations (cluster mode, storage engine, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
