/// Validators-only behavior for plain data models.
pub mod default_behavior;

/// Hub and cluster wiring for a worker's controllers.
pub mod logic_set;

pub mod model;
pub mod model_schema;
pub mod property;
pub mod property_change;

/// Wire form of a replicated property change.
pub mod sync_message;

pub mod view_controller;
