pub mod hub_request_kind;
pub mod hub_socket;
pub mod hub_state;
pub mod response_body;
pub mod view_hub;
