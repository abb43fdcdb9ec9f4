//! Model Trainer
//!
//! Fits one forest per mode and wraps it with the metadata needed to check,
//! at inference time, that incoming vectors use the same layout.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::forest::{ForestConfig, ForestStats, RandomForest};
use crate::error::TrainingError;
use crate::logic::dataset::{self, Sample, TrainingSet};
use crate::logic::features::{layout_hash, FeatureVector, LayoutMismatchError, FEATURE_VERSION};
use crate::logic::types::Mode;

/// Model metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub mode: Mode,
    pub feature_version: u8,
    pub layout_hash: u32,
    pub feature_count: usize,
    /// SHA-256 of the training samples
    pub dataset_fingerprint: String,
    pub samples: usize,
    pub benign_samples: usize,
    pub phishing_samples: usize,
    pub n_estimators: usize,
    pub tree_stats: ForestStats,
    pub seed: u64,
    pub training_time_ms: u64,
    pub trained_at: chrono::DateTime<chrono::Utc>,
}

/// A fitted forest for one mode. Immutable after training.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    forest: RandomForest,
    info: ModelInfo,
}

impl TrainedModel {
    pub fn mode(&self) -> Mode {
        self.info.mode
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }

    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }

    /// Check that `vector` was built with the layout this model was trained on
    pub fn check_layout(&self, vector: &FeatureVector) -> Result<(), LayoutMismatchError> {
        if vector.mode != self.info.mode
            || vector.version != self.info.feature_version
            || vector.layout_hash != self.info.layout_hash
        {
            return Err(LayoutMismatchError {
                mode: self.info.mode,
                expected_version: self.info.feature_version,
                expected_hash: self.info.layout_hash,
                actual_version: vector.version,
                actual_hash: vector.layout_hash,
            });
        }
        Ok(())
    }
}

/// Fit a forest on `set`. `fingerprint` identifies the samples the set came from.
pub fn train(
    set: &TrainingSet,
    config: &ForestConfig,
    fingerprint: String,
) -> Result<TrainedModel, TrainingError> {
    let start = Instant::now();
    let forest = RandomForest::fit(set, config)?;
    let training_time_ms = start.elapsed().as_millis() as u64;

    let (benign_samples, phishing_samples) = set.class_counts();
    let info = ModelInfo {
        mode: set.mode,
        feature_version: FEATURE_VERSION,
        layout_hash: layout_hash(set.mode),
        feature_count: set.n_features(),
        dataset_fingerprint: fingerprint,
        samples: set.len(),
        benign_samples,
        phishing_samples,
        n_estimators: forest.n_estimators(),
        tree_stats: forest.stats(),
        seed: forest.seed(),
        training_time_ms,
        trained_at: chrono::Utc::now(),
    };

    log::info!(
        "Trained {} model: {} samples ({} benign, {} phishing), {} trees ({} nodes, depth <= {}), seed {}, {} ms, dataset {}",
        info.mode,
        info.samples,
        info.benign_samples,
        info.phishing_samples,
        info.n_estimators,
        info.tree_stats.nodes,
        info.tree_stats.max_depth,
        info.seed,
        info.training_time_ms,
        &info.dataset_fingerprint[..info.dataset_fingerprint.len().min(12)],
    );

    Ok(TrainedModel { forest, info })
}

/// Build the training set from `samples` and fit it
pub fn train_on(
    mode: Mode,
    samples: &[Sample],
    config: &ForestConfig,
) -> Result<TrainedModel, TrainingError> {
    let set = TrainingSet::build(mode, samples)?;
    train(&set, config, dataset::fingerprint(samples))
}

/// Fit the embedded dataset of `mode`
pub fn train_mode(mode: Mode, config: &ForestConfig) -> Result<TrainedModel, TrainingError> {
    train_on(mode, dataset::samples(mode), config)
}
