use crate::error::{AssetLoadError, InferenceError};
use crate::label::LABEL_COUNT;
use crate::model_host::interface::{ModelHost, ModelLoader, ModelOutput};
use crate::model_host::model_config::ModelConfig;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ModelHostTractOnnx {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
}

impl ModelHostTractOnnx {
    pub fn load(config: ModelConfig) -> Result<Self, AssetLoadError> {
        if !config.model_path.is_file() {
            return Err(AssetLoadError::Missing {
                path: config.model_path.clone(),
            });
        }

        let malformed = |e: TractError| AssetLoadError::Malformed {
            path: config.model_path.clone(),
            reason: format!("{:#}", e),
        };

        let input_fact = InferenceFact::dt_shape(f32::datum_type(), config.input_dims());

        let plan = tract_onnx::onnx()
            .model_for_path(&config.model_path)
            .and_then(|model| model.with_input_fact(0, input_fact))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(malformed)?;

        // Catch a class-count mismatch at load time when the graph says so.
        let output_fact = plan.model().output_fact(0).map_err(malformed)?;
        if let Some(dims) = output_fact.shape.as_concrete() {
            let width = dims.last().copied().unwrap_or(0);
            if width != LABEL_COUNT {
                return Err(AssetLoadError::OutputWidth {
                    expected: LABEL_COUNT,
                    actual: width,
                });
            }
        }

        Ok(Self { plan, config })
    }
}

impl ModelHost for ModelHostTractOnnx {
    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn predict(&self, input: Tensor) -> Result<ModelOutput, InferenceError> {
        let outputs = self
            .plan
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| InferenceError::Invocation {
                reason: format!("{:#}", e),
            })?;

        let mut tensors: Vec<Tensor> = outputs
            .into_iter()
            .map(|value| value.into_tensor())
            .collect();

        match tensors.len() {
            0 => Err(InferenceError::EmptyOutput),
            1 => Ok(ModelOutput::Single(tensors.remove(0))),
            _ => Ok(ModelOutput::Many(tensors)),
        }
    }
}

pub struct ModelLoaderTractOnnx;

impl ModelLoader for ModelLoaderTractOnnx {
    fn load(&self, config: &ModelConfig) -> Result<Arc<dyn ModelHost>, AssetLoadError> {
        let host = ModelHostTractOnnx::load(config.clone())?;
        Ok(Arc::new(host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("plant-doctor-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_asset_names_the_path() {
        let config = ModelConfig {
            model_path: scratch_path("does-not-exist.onnx"),
            ..ModelConfig::default()
        };

        let error = ModelLoaderTractOnnx.load(&config).err().unwrap();

        assert!(matches!(error, AssetLoadError::Missing { .. }));
        assert!(error.to_string().contains("does-not-exist.onnx"));
    }

    #[test]
    fn test_garbage_asset_is_malformed() {
        let path = scratch_path("garbage.onnx");
        std::fs::write(&path, b"not an onnx model").unwrap();
        let config = ModelConfig {
            model_path: path.clone(),
            ..ModelConfig::default()
        };

        let error = ModelLoaderTractOnnx.load(&config).err().unwrap();
        let _ = std::fs::remove_file(&path);

        match error {
            AssetLoadError::Malformed { path: reported, reason } => {
                assert_eq!(reported, path);
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
