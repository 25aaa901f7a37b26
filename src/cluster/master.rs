/// HTTP discovery endpoint (`GET /getWorker`).
pub mod discovery;

/// Per-type record dispatch.
pub mod handler;

/// Event bus listener and per-connection loop.
pub mod server;
