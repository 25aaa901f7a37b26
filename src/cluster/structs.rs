/// Insertion-ordered, least-weight worker selection.
pub mod balancer;

/// A single record on the event bus.
pub mod cluster_message;

/// `data` record payload.
pub mod data_envelope;

/// `\r\n` record reassembly.
pub mod frame_buffer;

/// Worker-side link bookkeeping (connected flag, outbound queue).
pub mod link_state;

/// The master node.
pub mod master;

/// Master registry guarded by a single lock.
pub mod master_state;

/// Inbound record handed from a worker to its models.
pub mod model_message;

/// `sync` record payload.
pub mod sync_envelope;

/// Worker-side persistent link to the master.
pub mod transport_link;

/// A worker node.
pub mod worker;

/// Publicly reachable address of a worker.
pub mod worker_address;

/// Master-side view of one connected worker.
pub mod worker_record;
