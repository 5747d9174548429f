use crate::error::{AssetLoadError, InferenceError};
use crate::label::LABEL_COUNT;
use crate::model_host::interface::{ModelHost, ModelLoader, ModelOutput};
use crate::model_host::model_config::ModelConfig;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tract_onnx::prelude::*;

#[derive(Debug, Clone)]
pub enum FakeScores {
    Fixed(Vec<f32>),
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeShape {
    Single,
    Many,
}

pub struct ModelHostFake {
    config: ModelConfig,
    scores: FakeScores,
    shape: FakeShape,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl ModelHostFake {
    pub fn with_scores(scores: Vec<f32>) -> Self {
        Self {
            config: ModelConfig::default(),
            scores: FakeScores::Fixed(scores),
            shape: FakeShape::Single,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn uniform() -> Self {
        Self::with_scores(vec![1.0 / LABEL_COUNT as f32; LABEL_COUNT])
    }

    pub fn random() -> Self {
        Self {
            scores: FakeScores::Random,
            ..Self::uniform()
        }
    }

    pub fn with_shape(mut self, shape: FakeShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_scores(&self) -> Result<Vec<f32>, InferenceError> {
        match &self.scores {
            FakeScores::Fixed(scores) => Ok(scores.clone()),
            FakeScores::Random => {
                let mut rng = rand::rng();
                let dist = Uniform::new(0.0f32, 1.0).map_err(|e| InferenceError::Invocation {
                    reason: e.to_string(),
                })?;
                let raw: Vec<f32> = (0..LABEL_COUNT).map(|_| dist.sample(&mut rng)).collect();
                let total: f32 = raw.iter().sum();
                Ok(raw.iter().map(|s| s / total).collect())
            }
        }
    }
}

fn scores_to_tensor(scores: &[f32]) -> Tensor {
    tract_ndarray::Array2::from_shape_fn((1, scores.len()), |(_, i)| scores[i]).into_tensor()
}

impl ModelHost for ModelHostFake {
    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn predict(&self, input: Tensor) -> Result<ModelOutput, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if input.shape() != self.config.input_dims() {
            return Err(InferenceError::Invocation {
                reason: format!(
                    "expected input shape {:?}, got {:?}",
                    self.config.input_dims(),
                    input.shape()
                ),
            });
        }

        if let Some(reason) = &self.failure {
            return Err(InferenceError::Invocation {
                reason: reason.clone(),
            });
        }

        let scores = scores_to_tensor(&self.next_scores()?);

        Ok(match self.shape {
            FakeShape::Single => ModelOutput::Single(scores),
            FakeShape::Many => ModelOutput::Many(vec![scores, scores_to_tensor(&[0.0])]),
        })
    }
}

pub enum FakeLoad {
    Host(Arc<dyn ModelHost>),
    Missing,
    Malformed(String),
}

pub struct ModelLoaderFake {
    outcome: FakeLoad,
}

impl ModelLoaderFake {
    pub fn new(outcome: FakeLoad) -> Self {
        Self { outcome }
    }

    pub fn succeeding(host: Arc<dyn ModelHost>) -> Self {
        Self::new(FakeLoad::Host(host))
    }
}

impl ModelLoader for ModelLoaderFake {
    fn load(&self, config: &ModelConfig) -> Result<Arc<dyn ModelHost>, AssetLoadError> {
        match &self.outcome {
            FakeLoad::Host(host) => Ok(host.clone()),
            FakeLoad::Missing => Err(AssetLoadError::Missing {
                path: config.model_path.clone(),
            }),
            FakeLoad::Malformed(reason) => Err(AssetLoadError::Malformed {
                path: config.model_path.clone(),
                reason: reason.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(config: &ModelConfig) -> Tensor {
        Tensor::zero::<f32>(&config.input_dims()).unwrap()
    }

    #[test]
    fn test_random_scores_sum_to_one() {
        let host = ModelHostFake::random();

        let output = host.predict(input(host.config())).unwrap();

        let ModelOutput::Single(tensor) = output else {
            panic!("expected a single tensor");
        };
        let sum: f32 = tensor.as_slice::<f32>().unwrap().iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
        assert_eq!(tensor.shape(), &[1, LABEL_COUNT]);
    }

    #[test]
    fn test_rejects_wrong_input_shape() {
        let host = ModelHostFake::uniform();

        let result = host.predict(Tensor::zero::<f32>(&[1, 3, 224, 224]).unwrap());

        assert!(matches!(result, Err(InferenceError::Invocation { .. })));
        assert_eq!(host.call_count(), 1);
    }
}
