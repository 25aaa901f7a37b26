pub mod model_event;
pub mod mvc_error;
pub mod set_mode;
