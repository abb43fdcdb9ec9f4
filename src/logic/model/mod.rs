//! Model Module - Random Forest Training & Inference
//!
//! `tree` and `forest` are the learning algorithm, `trainer` wraps a fitted
//! forest with its metadata, `inference` scores single vectors.

pub mod forest;
pub mod inference;
pub mod trainer;
pub mod tree;

// Re-export common types
pub use forest::{ForestConfig, ForestStats, MaxFeatures, RandomForest, Vote};
pub use inference::{predict, ClassificationResult};
pub use trainer::{train, train_mode, train_on, ModelInfo, TrainedModel};
pub use tree::DecisionTree;
