//! SSL/TLS certificate handling.
//!
//! Loads PEM certificate chains and private keys (PKCS#8, PKCS#1 or SEC1)
//! and turns them into `rustls` configurations for the two encrypted
//! surfaces of a node: the master side of the event bus and the worker's
//! client-facing view hub. Workers build a client configuration from a CA
//! bundle to verify the master.
//!
//! All configurations are pinned to the `ring` crypto provider.

/// Certificate loading errors.
pub mod enums;

/// Loaded certificate material.
pub mod structs;

/// Loading and configuration builders.
pub mod impls;
