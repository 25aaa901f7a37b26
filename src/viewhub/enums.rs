/// Outbound socket frames.
pub mod client_event;

/// Hub errors.
pub mod hub_error;

/// What the hub forwards to the application.
pub mod hub_request;

/// Inbound request kinds.
pub mod hub_request_kind;
