//! Error types
//!
//! Training is the only stage that can fail. Classification itself is total.

use thiserror::Error;

use crate::logic::types::Mode;

/// Errors raised while fitting a forest on a training set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainingError {
    /// No samples at all
    #[error("training set for {0} is empty")]
    EmptyDataset(Mode),

    /// Feature rows and labels disagree in length
    #[error("training set for {mode} has {rows} feature rows but {labels} labels")]
    ShapeMismatch {
        mode: Mode,
        rows: usize,
        labels: usize,
    },

    /// Feature width does not match the domain layout
    #[error("training set for {mode} has {actual} features per row, layout expects {expected}")]
    FeatureWidth {
        mode: Mode,
        expected: usize,
        actual: usize,
    },

    /// Only one label value present, nothing to separate
    #[error("training set for {0} contains a single class")]
    SingleClass(Mode),

    /// Forest configured with zero trees
    #[error("forest must contain at least one tree")]
    NoEstimators,
}

/// Top-level detector errors
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("failed to train {mode} model: {source}")]
    Training {
        mode: Mode,
        #[source]
        source: TrainingError,
    },

    #[error("unknown mode '{0}' (expected 'url' or 'email')")]
    UnknownMode(String),

    #[error("{actual} model supplied where a {expected} model is required")]
    ModeMismatch { expected: Mode, actual: Mode },
}

pub type DetectorResult<T> = Result<T, DetectorError>;
