use std::sync::Arc;
use crate::mvc::structs::model::Model;
use crate::mvc::traits::model_behavior::ModelBehavior;

pub struct ViewController {
    pub(crate) model: Arc<Model>,
    pub(crate) behavior: Arc<dyn ModelBehavior>,
}
