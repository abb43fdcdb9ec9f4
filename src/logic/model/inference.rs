//! Inference - score one feature vector against a trained model

use std::time::Instant;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::trainer::TrainedModel;
use crate::logic::features::FeatureVector;
use crate::logic::types::{Label, Mode};

/// Prediction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub mode: Mode,
    pub label: Label,
    /// Averaged ensemble probability of `label` (0.5 - 1.0)
    pub confidence: f32,
    pub phishing_probability: f32,
    pub votes_phishing: usize,
    pub votes_total: usize,
    pub inference_time_us: u64,
}

impl ClassificationResult {
    pub fn is_phishing(&self) -> bool {
        self.label.is_phishing()
    }
}

/// Run the forest on `vector`
pub fn predict(model: &TrainedModel, vector: &FeatureVector) -> ClassificationResult {
    let start = Instant::now();

    if let Err(e) = model.check_layout(vector) {
        log::warn!("{}", e);
    }

    let vote = model.forest().vote(ArrayView1::from(vector.as_slice()));
    let inference_time_us = start.elapsed().as_micros() as u64;

    ClassificationResult {
        mode: model.mode(),
        label: vote.label,
        confidence: vote.confidence(),
        phishing_probability: vote.phishing_probability(),
        votes_phishing: vote.votes_phishing,
        votes_total: vote.votes_total,
        inference_time_us,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::extract;
    use crate::logic::model::{train_mode, ForestConfig};

    #[test]
    fn test_predict_fields_are_consistent() {
        let model = train_mode(Mode::Url, &ForestConfig::default().with_seed(5)).unwrap();
        let result = predict(&model, &extract(Mode::Url, "http://malicious-verify-id.cf"));

        assert_eq!(result.mode, Mode::Url);
        assert_eq!(result.votes_total, 100);
        assert!(result.confidence >= 0.5 && result.confidence <= 1.0);
        if result.is_phishing() {
            assert_eq!(result.confidence, result.phishing_probability);
        } else {
            assert!((result.confidence + result.phishing_probability - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_result_serializes() {
        let model = train_mode(Mode::Email, &ForestConfig::default().with_seed(5).with_trees(10)).unwrap();
        let result = predict(&model, &extract(Mode::Email, "Your Amazon order has been shipped"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "email");
        assert_eq!(json["votes_total"], 10);
        assert!(json["label"] == "benign" || json["label"] == "phishing");
    }
}
