/// Master-side consumer of `data` records addressed by service name.
pub mod event_service;
