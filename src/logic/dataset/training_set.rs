//! Training Set - feature matrix + label vector for one mode
//!
//! Row i is always derived from sample i and carries sample i's label.

use ndarray::{Array2, ArrayView1};

use super::samples::Sample;
use crate::error::TrainingError;
use crate::logic::features::{extractor_for, feature_count, FeatureExtractor};
use crate::logic::types::{Label, Mode};

#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub mode: Mode,
    /// One row per sample, columns in layout order
    pub features: Array2<f32>,
    pub labels: Vec<Label>,
}

impl TrainingSet {
    /// Extract every sample with the mode's own extractor
    pub fn build(mode: Mode, samples: &[Sample]) -> Result<Self, TrainingError> {
        Self::build_with(extractor_for(mode), samples)
    }

    pub fn build_with(
        extractor: &dyn FeatureExtractor,
        samples: &[Sample],
    ) -> Result<Self, TrainingError> {
        let mode = extractor.mode();
        let width = feature_count(mode);

        let mut flat = Vec::with_capacity(samples.len() * width);
        let mut labels = Vec::with_capacity(samples.len());

        for sample in samples {
            let vector = extractor.extract(sample.text);
            if vector.len() != width {
                return Err(TrainingError::FeatureWidth {
                    mode,
                    expected: width,
                    actual: vector.len(),
                });
            }
            flat.extend_from_slice(vector.as_slice());
            labels.push(sample.label);
        }

        let features = Array2::from_shape_vec((samples.len(), width), flat).map_err(|_| {
            TrainingError::ShapeMismatch {
                mode,
                rows: samples.len(),
                labels: labels.len(),
            }
        })?;

        Ok(Self { mode, features, labels })
    }

    /// Assemble from an existing matrix, checking the row/label invariant
    pub fn from_parts(
        mode: Mode,
        features: Array2<f32>,
        labels: Vec<Label>,
    ) -> Result<Self, TrainingError> {
        if features.nrows() != labels.len() {
            return Err(TrainingError::ShapeMismatch {
                mode,
                rows: features.nrows(),
                labels: labels.len(),
            });
        }
        Ok(Self { mode, features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f32> {
        self.features.row(index)
    }

    /// (benign, phishing) counts
    pub fn class_counts(&self) -> (usize, usize) {
        let phishing = self.labels.iter().filter(|l| l.is_phishing()).count();
        (self.labels.len() - phishing, phishing)
    }

    /// Check everything the trainer relies on
    pub fn validate(&self) -> Result<(), TrainingError> {
        if self.is_empty() {
            return Err(TrainingError::EmptyDataset(self.mode));
        }
        if self.features.nrows() != self.labels.len() {
            return Err(TrainingError::ShapeMismatch {
                mode: self.mode,
                rows: self.features.nrows(),
                labels: self.labels.len(),
            });
        }
        let expected = feature_count(self.mode);
        if self.n_features() != expected {
            return Err(TrainingError::FeatureWidth {
                mode: self.mode,
                expected,
                actual: self.n_features(),
            });
        }
        let (benign, phishing) = self.class_counts();
        if benign == 0 || phishing == 0 {
            return Err(TrainingError::SingleClass(self.mode));
        }
        Ok(())
    }
}
