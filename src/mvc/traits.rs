pub mod model_behavior;
