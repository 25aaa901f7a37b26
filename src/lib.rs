//! # Neutrino
//!
//! A clustered realtime MVC runtime built on tokio and actix-web.
//!
//! ## Overview
//!
//! A deployment is one master and any number of workers. Browser clients ask
//! the master's discovery endpoint for the least-loaded worker, then open a
//! WebSocket to that worker's view hub. Models live on every worker; a local
//! edit is persisted by the worker that received it and replicated to the
//! others through the master over a secret-authenticated TCP event bus.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use neutrino::mvc::structs::model_schema::ModelSchema;
//! use neutrino::mvc::structs::default_behavior::DefaultBehavior;
//!
//! let schema = ModelSchema::new("counter").property("value", 0);
//! let model = logic_set.register(schema, Arc::new(DefaultBehavior)).await?;
//! model.set("value", serde_json::json!(1)).await?;
//! ```
//!
//! ## Modules
//!
//! - [`cluster`] - Master, worker, balancer and the event bus wire format
//! - [`common`] - Logging setup, error type and small helpers
//! - [`config`] - TOML configuration loading and validation
//! - [`mvc`] - Replicated models, controllers and the logic set
//! - [`sessions`] - Expiring client sessions
//! - [`ssl`] - rustls configuration from PEM files
//! - [`storage`] - Document collections over memory or SQLite
//! - [`structs`] - CLI arguments
//! - [`viewhub`] - Session-aware WebSocket hub for clients

/// Master/worker event bus, load balancer and discovery endpoint.
pub mod cluster;

/// Shared helpers and the crate-wide error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and writing the TOML configuration.
pub mod config;

/// Replicated models and their controllers.
pub mod mvc;

pub mod sessions;

/// TLS configuration for the event bus and the view hub.
pub mod ssl;

/// Document storage backends.
pub mod storage;

/// CLI argument parsing.
pub mod structs;

/// Client-facing WebSocket hub.
pub mod viewhub;
