use crate::error::{InferenceError, ModelLoadError};
use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::image_classifier::label_set::LabelSet;
use crate::library::logger::interface::Logger;
use crate::preprocessor::{ImageTensor, MODEL_INPUT_SIZE};
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

/// A frozen ONNX image classifier taking NHWC `[1, 224, 224, 3]` input.
pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    labels: LabelSet,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn load(
        model_path: &Path,
        labels_path: &Path,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let logger = logger.with_namespace("image_classifier");
        let labels = LabelSet::load(labels_path)?;

        let model_error = |e: TractError| ModelLoadError::Model {
            path: model_path.to_path_buf(),
            reason: e.to_string(),
        };

        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .map_err(model_error)?
            .with_input_fact(
                0,
                f32::fact([1, MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, 3]).into(),
            )
            .map_err(model_error)?
            .into_optimized()
            .map_err(model_error)?;

        let outputs = model
            .output_fact(0)
            .map_err(model_error)?
            .shape
            .as_concrete()
            .and_then(|shape| shape.last().copied())
            .ok_or_else(|| ModelLoadError::UnknownOutputShape {
                path: model_path.to_path_buf(),
            })?;

        labels.check_matches(outputs)?;

        let model = model.into_runnable().map_err(model_error)?;

        logger.info(&format!(
            "Loaded model {} with {} labels",
            model_path.display(),
            labels.len()
        ));

        Ok(Self {
            model,
            labels,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn labels(&self) -> &LabelSet {
        &self.labels
    }

    fn infer(&self, tensor: ImageTensor) -> Result<Prediction, InferenceError> {
        let runtime_error = |e: TractError| InferenceError::Runtime(e.to_string());

        let input: Tensor = tensor.into_batch().into();
        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(runtime_error)?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::Runtime("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(runtime_error)?;

        let prediction = Prediction::new(output.iter().copied().collect());
        self.logger
            .debug(&format!("Prediction: {:?}", prediction.probabilities()));

        Ok(prediction)
    }
}
