use crate::error::InferenceError;
use crate::inference::preprocess::preprocess;
use crate::inference::select::{select_label, Prediction};
use crate::label::LABEL_COUNT;
use crate::model_host::interface::{ModelHost, ModelOutput};
use std::sync::Arc;
use tract_onnx::prelude::*;

#[derive(Clone)]
pub struct InferenceAdapter {
    host: Arc<dyn ModelHost>,
}

impl InferenceAdapter {
    pub fn new(host: Arc<dyn ModelHost>) -> Self {
        Self { host }
    }

    pub fn preprocess(&self, image: &[u8]) -> Result<Tensor, InferenceError> {
        preprocess(image, self.host.config())
    }

    /// Consumes the input; every tensor is dropped before this returns.
    pub fn infer(&self, input: Tensor) -> Result<Vec<f32>, InferenceError> {
        let scores = match self.host.predict(input)? {
            ModelOutput::Single(tensor) => tensor,
            ModelOutput::Many(tensors) => tensors
                .into_iter()
                .next()
                .ok_or(InferenceError::EmptyOutput)?,
        };

        let scores = scores
            .cast_to::<f32>()
            .map_err(|e| InferenceError::OutputType {
                reason: format!("{:#}", e),
            })?;
        let scores = scores
            .as_slice::<f32>()
            .map_err(|e| InferenceError::OutputType {
                reason: format!("{:#}", e),
            })?;

        if scores.len() != LABEL_COUNT {
            return Err(InferenceError::OutputWidth {
                expected: LABEL_COUNT,
                actual: scores.len(),
            });
        }

        Ok(scores.to_vec())
    }

    pub fn predict(&self, image: &[u8]) -> Result<Prediction, InferenceError> {
        let input = self.preprocess(image)?;
        let scores = self.infer(input)?;
        Ok(select_label(&scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LABELS;
    use crate::model_host::impl_fake::{FakeShape, ModelHostFake};
    use crate::model_host::model_config::ModelConfig;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn leaf_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(40, 30))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn scores_peaking_at(index: usize) -> Vec<f32> {
        let mut scores = vec![0.01; LABEL_COUNT];
        scores[index] = 0.6;
        scores
    }

    #[test]
    fn test_single_and_many_outputs_agree() {
        let single = InferenceAdapter::new(Arc::new(ModelHostFake::with_scores(
            scores_peaking_at(20),
        )));
        let many = InferenceAdapter::new(Arc::new(
            ModelHostFake::with_scores(scores_peaking_at(20)).with_shape(FakeShape::Many),
        ));

        let a = single.infer(single.preprocess(&leaf_png()).unwrap()).unwrap();
        let b = many.infer(many.preprocess(&leaf_png()).unwrap()).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), LABEL_COUNT);
    }

    #[test]
    fn test_predict_end_to_end() {
        let adapter = InferenceAdapter::new(Arc::new(ModelHostFake::with_scores(
            scores_peaking_at(21),
        )));

        let prediction = adapter.predict(&leaf_png()).unwrap();

        assert_eq!(prediction.label, LABELS[21]);
        assert_eq!(prediction.confidence_percent(), "60.0");
    }

    #[test]
    fn test_wrong_output_width_fails_fast() {
        let adapter =
            InferenceAdapter::new(Arc::new(ModelHostFake::with_scores(vec![0.5; 10])));

        let result = adapter.predict(&leaf_png());

        assert!(matches!(
            result,
            Err(InferenceError::OutputWidth {
                expected: LABEL_COUNT,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_corrupt_image_never_reaches_the_host() {
        let host = Arc::new(ModelHostFake::uniform());
        let adapter = InferenceAdapter::new(host.clone());

        let result = adapter.predict(b"\x89PNG but not really");

        assert!(matches!(result, Err(InferenceError::Decode(_))));
        assert_eq!(host.call_count(), 0);
    }

    #[test]
    fn test_host_failure_is_an_inference_error() {
        let adapter = InferenceAdapter::new(Arc::new(ModelHostFake::uniform().failing("oom")));

        let error = adapter.predict(&leaf_png()).unwrap_err();

        assert!(error.to_string().contains("oom"));
    }

    #[test]
    fn test_preprocess_uses_host_resolution() {
        let config = ModelConfig {
            input_shape: (96, 128),
            ..ModelConfig::default()
        };
        let adapter = InferenceAdapter::new(Arc::new(ModelHostFake::uniform().with_config(config)));

        let tensor = adapter.preprocess(&leaf_png()).unwrap();

        assert_eq!(tensor.shape(), &[1, 96, 128, 3]);
    }
}
