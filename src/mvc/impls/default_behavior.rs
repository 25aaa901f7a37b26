use crate::mvc::structs::default_behavior::DefaultBehavior;
use crate::mvc::traits::model_behavior::ModelBehavior;

impl ModelBehavior for DefaultBehavior {}
