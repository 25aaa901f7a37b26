pub mod client_request;
pub mod client_response;
pub mod hub_connection;
pub mod hub_frame;
pub mod hub_socket;
pub mod hub_state;
pub mod new_value;
pub mod pending_request;
pub mod response_body;
pub mod view_hub;
