use std::path::PathBuf;
use thiserror::Error;

/// The model asset could not be turned into a usable host. Reported once;
/// prediction stays disabled until restart.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("model asset not found at {path}")]
    Missing { path: PathBuf },
    #[error("model asset at {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("model outputs {actual} classes but {expected} labels are known")]
    OutputWidth { expected: usize, actual: usize },
    #[error("a model is already loaded")]
    AlreadyLoaded,
}

/// A single prediction attempt failed. Never fatal to the session.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("could not read image {path}: {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("model is not loaded")]
    ModelNotLoaded,
    #[error("model invocation failed: {reason}")]
    Invocation { reason: String },
    #[error("model returned no output tensors")]
    EmptyOutput,
    #[error("model output is not numeric: {reason}")]
    OutputType { reason: String },
    #[error("model returned {actual} scores but {expected} labels are known")]
    OutputWidth { expected: usize, actual: usize },
}
