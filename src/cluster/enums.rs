/// Encoding and framing errors.
pub mod encoding_error;

/// Transport link errors.
pub mod link_error;

/// Events a worker's transport link reports.
pub mod link_event;

/// Membership events published by the master.
pub mod master_event;

/// The `type` field of a cluster record.
pub mod message_type;
