use std::path::PathBuf;
use thiserror::Error;

/// Raised when the camera cannot be opened. Fatal at startup.
#[derive(Debug, Error)]
pub enum FrameSourceError {
    #[error("camera device {index} unavailable: {reason}")]
    DeviceUnavailable { index: i32, reason: String },
}

/// A single frame could not be read. The poll loop skips the cycle and carries on.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("frame capture failed: {reason}")]
pub struct CaptureFailure {
    pub reason: String,
}

impl CaptureFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read label file {path}: {source}")]
    LabelFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("label file {path} contains no labels")]
    EmptyLabelSet { path: PathBuf },

    #[error("failed to load model {path}: {reason}")]
    Model { path: PathBuf, reason: String },

    #[error("model {path} has no concrete output shape")]
    UnknownOutputShape { path: PathBuf },

    #[error("label file has {labels} labels but the model outputs {outputs} classes")]
    LabelCountMismatch { labels: usize, outputs: usize },
}

/// The frame could not be turned into a model input.
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("resize failed: {0}")]
    Resize(String),

    #[error("resized image does not fit the model input: {0}")]
    Layout(String),
}

/// Preprocessing or inference of a captured frame failed. Treated as a broken invariant,
/// never retried.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference runtime error: {0}")]
    Runtime(String),

    #[error("prediction has {actual} classes, expected {expected}")]
    Shape { expected: usize, actual: usize },

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    FrameSource(#[from] FrameSourceError),

    #[error(transparent)]
    ModelLoad(#[from] ModelLoadError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("gui error: {0}")]
    Gui(String),

    #[error("logger error: {0}")]
    Logger(String),
}
