use crate::error::ModelLoadError;
use std::path::Path;

/// Class names in model output order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    #[cfg(test)]
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// One label per line, trimmed. A blank line inside the file keeps its index as an
    /// empty label; blank lines at the end are dropped.
    pub fn parse(text: &str) -> Self {
        let mut labels: Vec<String> = text.lines().map(|line| line.trim().to_string()).collect();
        while labels.last().is_some_and(|label| label.is_empty()) {
            labels.pop();
        }

        Self { labels }
    }

    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelLoadError::LabelFile {
            path: path.to_path_buf(),
            source,
        })?;

        let labels = Self::parse(&text);
        if labels.is_empty() {
            return Err(ModelLoadError::EmptyLabelSet {
                path: path.to_path_buf(),
            });
        }

        Ok(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Fails unless the label count matches the model's output dimension.
    pub fn check_matches(&self, outputs: usize) -> Result<(), ModelLoadError> {
        if self.labels.len() != outputs {
            return Err(ModelLoadError::LabelCountMismatch {
                labels: self.labels.len(),
                outputs,
            });
        }
        Ok(())
    }
}
