//! Master/worker event bus.
//!
//! Workers keep one persistent TCP (optionally TLS) link to the master.
//! Records are JSON objects terminated by `\r\n`; every record carries the
//! shared secret of its sender's role and is checked on arrival.
//!
//! # Roles
//!
//! - **Master**: accepts worker links, tracks each worker's advertised
//!   address and load, relays `sync` records to every other worker, routes
//!   `data` records to named event services and answers discovery requests
//!   with the least-loaded worker.
//! - **Worker**: reconnects with a fixed back-off, queues outbound records
//!   while offline, reports its address and load, and hands inbound `sync`
//!   and `data` records to its models.
//!
//! # Record Types
//!
//! | type      | direction        | value                                   |
//! |-----------|------------------|-----------------------------------------|
//! | `address` | worker → master  | `{host, port, secure}`                  |
//! | `load`    | worker → master  | load estimate (number)                  |
//! | `sync`    | both             | `{modelName, data}`                     |
//! | `data`    | both             | `{modelName?, serviceName?, data}`      |

/// Cluster enumerations (record types, link events, errors).
pub mod enums;

/// Cluster data structures.
pub mod structs;

/// Implementation blocks for cluster types.
pub mod impls;

/// Extension points of the master.
pub mod traits;

/// Record framing and JSON encoding.
pub mod encoding;

/// Master-side connection handling, dispatch and discovery.
pub mod master;

/// Type aliases shared across the cluster.
pub mod types;

#[cfg(test)]
mod tests;
