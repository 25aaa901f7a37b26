pub mod default_behavior;
pub mod logic_set;
pub mod model;
pub mod model_schema;
pub mod property;
pub mod view_controller;
