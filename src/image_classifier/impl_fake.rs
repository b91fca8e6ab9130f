use crate::error::InferenceError;
use crate::image_classifier::interface::{ImageClassifier, Prediction};
use crate::image_classifier::label_set::LabelSet;
use crate::preprocessor::{ImageTensor, MODEL_INPUT_SIZE};
use std::cell::Cell;

/// Returns a fixed distribution for every tensor, or fails every call.
pub struct ImageClassifierFake {
    labels: LabelSet,
    distribution: Option<Vec<f32>>,
    calls: Cell<usize>,
}

impl ImageClassifierFake {
    pub fn new(labels: &[&str], distribution: Vec<f32>) -> Self {
        Self {
            labels: LabelSet::new(labels.iter().map(|l| l.to_string()).collect()),
            distribution: Some(distribution),
            calls: Cell::new(0),
        }
    }

    pub fn failing(labels: &[&str]) -> Self {
        Self {
            labels: LabelSet::new(labels.iter().map(|l| l.to_string()).collect()),
            distribution: None,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn labels(&self) -> &LabelSet {
        &self.labels
    }

    fn infer(&self, tensor: ImageTensor) -> Result<Prediction, InferenceError> {
        self.calls.set(self.calls.get() + 1);

        assert_eq!(tensor.shape(), &[MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, 3]);

        match &self.distribution {
            Some(distribution) => Ok(Prediction::new(distribution.clone())),
            None => Err(InferenceError::Runtime("fake inference failure".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{ChannelOrder, Frame};
    use crate::image_classifier::interface::Classification;
    use crate::preprocessor::preprocess;

    fn tensor() -> ImageTensor {
        preprocess(&Frame::from_fn(32, 32, ChannelOrder::Bgr, |_, _| [9, 9, 9])).unwrap()
    }

    #[test]
    fn test_classify_maps_argmax_to_label() {
        let classifier = ImageClassifierFake::new(&["cat", "dog"], vec![0.1, 0.9]);

        let classification = classifier.classify(tensor()).unwrap();

        assert_eq!(
            classification,
            Classification {
                label: "dog".to_string(),
                confidence: 0.9
            }
        );
        assert_eq!(classifier.calls(), 1);
    }

    #[test]
    fn test_classify_rejects_distribution_of_wrong_length() {
        let classifier = ImageClassifierFake::new(&["cat", "dog"], vec![0.2, 0.3, 0.5]);

        let result = classifier.classify(tensor());

        assert!(matches!(
            result,
            Err(InferenceError::Shape {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_failing_classifier_reports_runtime_error() {
        let classifier = ImageClassifierFake::failing(&["cat"]);

        assert!(matches!(
            classifier.classify(tensor()),
            Err(InferenceError::Runtime(_))
        ));
    }
}
