//! Common utilities and shared functionality.
//!
//! Helpers used across the cluster, MVC and view hub layers:
//!
//! - Logging setup (`fern` with coloured levels)
//! - Wall clock helpers in milliseconds
//! - Constant time secret comparison
//! - The private member naming rule shared by models and controllers
//! - `CustomError` for bootstrap failures

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
