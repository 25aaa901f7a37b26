pub mod balancer;
pub mod cluster_message;
pub mod frame_buffer;
pub mod link_error;
pub mod master;
pub mod master_state;
pub mod transport_link;
pub mod worker;
pub mod worker_address;
