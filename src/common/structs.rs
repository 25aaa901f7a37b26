/// Plain message error used during bootstrap.
pub mod custom_error;
