use crate::error::{AssetLoadError, InferenceError};
use crate::model_host::model_config::ModelConfig;
use std::sync::Arc;
use tract_onnx::prelude::Tensor;

/// Graphs may return their scores as the only output or as the first of
/// several outputs.
#[derive(Debug)]
pub enum ModelOutput {
    Single(Tensor),
    Many(Vec<Tensor>),
}

pub trait ModelHost: Send + Sync {
    fn config(&self) -> &ModelConfig;
    fn predict(&self, input: Tensor) -> Result<ModelOutput, InferenceError>;
}

pub trait ModelLoader: Send + Sync {
    fn load(&self, config: &ModelConfig) -> Result<Arc<dyn ModelHost>, AssetLoadError>;
}
