use crate::error::InferenceError;
use crate::image_classifier::label_set::LabelSet;
use crate::preprocessor::ImageTensor;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Model output: one probability per label, in label order.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    probabilities: Vec<f32>,
}

impl Prediction {
    pub fn new(probabilities: Vec<f32>) -> Self {
        Self { probabilities }
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn probabilities(&self) -> &[f32] {
        &self.probabilities
    }

    /// Index of the first maximal probability. NaN never wins.
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &p) in self.probabilities.iter().enumerate() {
            if p.is_nan() {
                continue;
            }
            match best {
                Some((_, best_p)) if p <= best_p => {}
                _ => best = Some((index, p)),
            }
        }
        best.map(|(index, _)| index)
    }
}

pub trait ImageClassifier {
    fn labels(&self) -> &LabelSet;

    fn infer(&self, tensor: ImageTensor) -> Result<Prediction, InferenceError>;

    fn classify(&self, tensor: ImageTensor) -> Result<Classification, InferenceError> {
        let prediction = self.infer(tensor)?;
        let labels = self.labels();

        if prediction.len() != labels.len() {
            return Err(InferenceError::Shape {
                expected: labels.len(),
                actual: prediction.len(),
            });
        }

        let index = prediction
            .argmax()
            .ok_or_else(|| InferenceError::Runtime("prediction has no finite values".to_string()))?;

        match labels.get(index) {
            Some(label) => Ok(Classification {
                label: label.to_string(),
                confidence: prediction.probabilities()[index],
            }),
            None => Err(InferenceError::Shape {
                expected: labels.len(),
                actual: index + 1,
            }),
        }
    }
}
