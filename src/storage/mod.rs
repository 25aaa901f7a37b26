//! Document storage.
//!
//! Models and sessions persist through a small document-store contract:
//! named collections of JSON objects supporting `find_one`, `find`,
//! `insert`, `update` (a `$set`-style merge on the most recently inserted
//! match) and `remove`. Filters are JSON objects matched by top-level
//! equality.
//!
//! # Backends
//!
//! - **memory**: process-local collections, used by tests and single-node setups
//! - **sqlite3**: one `documents` table, bodies stored as JSON text (via `sqlx`)

/// Storage errors.
pub mod enums;

/// Backend structures.
pub mod structs;

/// Backend implementations.
pub mod impls;

/// Collection and provider contracts.
pub mod traits;

/// Filter matching and backend selection.
#[allow(clippy::module_inception)]
pub mod storage;

/// Shared type aliases.
pub mod types;
