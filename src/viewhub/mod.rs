//! Session-aware client hub.
//!
//! Browser clients talk to a worker over a WebSocket at `/viewhub`. Every
//! frame in either direction is `{"event": <name>, "data": <object>}`.
//!
//! # Inbound Events
//!
//! `modelRequest`, `editRequest`, `invokeRequest`, `subscribeRequest` and
//! `unsubscribeRequest`. Each request is normalized before it reaches the
//! application: a missing request id is generated, and the session is
//! refreshed (or created when missing or expired) and bound to the socket.
//!
//! # Outbound Events
//!
//! One `<kind>Response` per request, correlated by request id and delivered
//! only to the socket that asked. `newValue` pushes go to every socket bound
//! to the subscribed session. Unanswered requests time out with
//! `{success: false, error: "Request timed out"}`; closing a socket drops
//! its pending requests and its sessions' subscriptions.

pub mod enums;
pub mod structs;
pub mod impls;

/// actix-web endpoint serving the hub socket.
pub mod server;

#[cfg(test)]
mod tests;
