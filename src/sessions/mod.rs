//! Client sessions.
//!
//! A session is a document in the sessions collection keyed by `sid`, with
//! `lastAccess` and `expired` timestamps (unix milliseconds) and an
//! arbitrary payload. Each access pushes `expired` forward by the configured
//! lifetime; a periodic sweep deletes sessions whose `expired` has passed.

pub mod enums;
pub mod structs;
pub mod impls;
