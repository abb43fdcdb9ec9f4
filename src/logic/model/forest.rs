//! Random Forest - bagged decision trees with soft voting
//!
//! Every tree sees its own bootstrap draw and its own RNG, derived from a
//! single forest seed. Prediction averages the leaf probabilities.

use ndarray::ArrayView1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::tree::{argmax, DecisionTree, TreeParams, N_CLASSES};
use crate::constants::{DEFAULT_MIN_SAMPLES_SPLIT, DEFAULT_N_ESTIMATORS};
use crate::error::TrainingError;
use crate::logic::dataset::TrainingSet;
use crate::logic::types::Label;

// ============================================================================
// CONFIG
// ============================================================================

/// How many features each split may look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    Sqrt,
    Log2,
    All,
    Count(usize),
}

impl MaxFeatures {
    /// Resolve against the feature count, never below 1
    pub fn resolve(&self, n_features: usize) -> usize {
        let n = n_features.max(1);
        let resolved = match self {
            MaxFeatures::Sqrt => (n as f64).sqrt().floor() as usize,
            MaxFeatures::Log2 => (n as f64).log2().floor() as usize,
            MaxFeatures::All => n,
            MaxFeatures::Count(k) => *k,
        };
        resolved.clamp(1, n)
    }
}

/// Forest hyper-parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestConfig {
    pub n_estimators: usize,
    pub max_features: MaxFeatures,
    pub min_samples_split: usize,
    pub max_depth: Option<usize>,
    /// Draw a bootstrap sample per tree (otherwise every tree sees all rows)
    pub bootstrap: bool,
    /// None = seed from OS entropy
    pub seed: Option<u64>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: DEFAULT_N_ESTIMATORS,
            max_features: MaxFeatures::Sqrt,
            min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT,
            max_depth: None,
            bootstrap: true,
            seed: None,
        }
    }
}

impl ForestConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trees(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// ============================================================================
// VOTE
// ============================================================================

/// Aggregated ensemble output for one row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub label: Label,
    /// Mean leaf probability per class
    pub probabilities: [f32; N_CLASSES],
    /// Trees whose own prediction is phishing
    pub votes_phishing: usize,
    pub votes_total: usize,
}

impl Vote {
    /// Probability of the winning label
    pub fn confidence(&self) -> f32 {
        self.probabilities[self.label.class_index()]
    }

    pub fn phishing_probability(&self) -> f32 {
        self.probabilities[Label::Phishing.class_index()]
    }
}

/// Shape of a fitted forest, recorded in the model metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestStats {
    pub nodes: usize,
    pub leaves: usize,
    /// Deepest tree in the forest
    pub max_depth: usize,
}

// ============================================================================
// FOREST
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    seed: u64,
}

impl RandomForest {
    /// Fit a forest on a validated training set
    pub fn fit(set: &TrainingSet, config: &ForestConfig) -> Result<Self, TrainingError> {
        if config.n_estimators == 0 {
            return Err(TrainingError::NoEstimators);
        }
        set.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut forest_rng = StdRng::seed_from_u64(seed);

        let n_samples = set.len();
        let n_features = set.n_features();
        let params = TreeParams {
            max_features: config.max_features.resolve(n_features),
            min_samples_split: config.min_samples_split.max(2),
            max_depth: config.max_depth,
        };

        let trees = (0..config.n_estimators)
            .map(|_| {
                let mut tree_rng = StdRng::seed_from_u64(forest_rng.gen());
                let indices: Vec<usize> = if config.bootstrap {
                    (0..n_samples).map(|_| tree_rng.gen_range(0..n_samples)).collect()
                } else {
                    (0..n_samples).collect()
                };
                DecisionTree::fit(&set.features, &set.labels, &indices, params, &mut tree_rng)
            })
            .collect();

        Ok(Self { trees, seed })
    }

    /// Soft vote over all trees
    pub fn vote(&self, row: ArrayView1<'_, f32>) -> Vote {
        let mut sums = [0.0f32; N_CLASSES];
        let mut votes_phishing = 0;

        for tree in &self.trees {
            let proba = tree.predict_proba(row);
            for (sum, p) in sums.iter_mut().zip(proba.iter()) {
                *sum += p;
            }
            if argmax(&proba).is_phishing() {
                votes_phishing += 1;
            }
        }

        let n = self.trees.len().max(1) as f32;
        let probabilities = sums.map(|s| s / n);

        Vote {
            label: argmax(&probabilities),
            probabilities,
            votes_phishing,
            votes_total: self.trees.len(),
        }
    }

    pub fn predict(&self, row: ArrayView1<'_, f32>) -> Label {
        self.vote(row).label
    }

    pub fn n_estimators(&self) -> usize {
        self.trees.len()
    }

    /// Seed actually used, even when none was configured
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> ForestStats {
        self.trees.iter().fold(ForestStats::default(), |acc, tree| ForestStats {
            nodes: acc.nodes + tree.node_count(),
            leaves: acc.leaves + tree.leaf_count(),
            max_depth: acc.max_depth.max(tree.depth()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dataset::training_set;
    use crate::logic::types::Mode;

    #[test]
    fn test_max_features_resolve() {
        assert_eq!(MaxFeatures::Sqrt.resolve(7), 2);
        assert_eq!(MaxFeatures::Sqrt.resolve(6), 2);
        assert_eq!(MaxFeatures::Log2.resolve(1), 1);
        assert_eq!(MaxFeatures::All.resolve(6), 6);
        assert_eq!(MaxFeatures::Count(0).resolve(6), 1);
        assert_eq!(MaxFeatures::Count(50).resolve(6), 6);
    }

    #[test]
    fn test_default_config() {
        let config = ForestConfig::default();
        assert_eq!(config.n_estimators, 100);
        assert!(config.bootstrap);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_zero_estimators_rejected() {
        let set = training_set(Mode::Url).unwrap();
        let config = ForestConfig::default().with_trees(0);
        assert_eq!(RandomForest::fit(&set, &config).unwrap_err(), TrainingError::NoEstimators);
    }

    #[test]
    fn test_seeded_forest_is_reproducible() {
        let set = training_set(Mode::Email).unwrap();
        let config = ForestConfig::default().with_seed(42);

        let a = RandomForest::fit(&set, &config).unwrap();
        let b = RandomForest::fit(&set, &config).unwrap();

        for i in 0..set.len() {
            assert_eq!(a.vote(set.row(i)), b.vote(set.row(i)));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_unseeded_forest_records_its_seed() {
        let set = training_set(Mode::Url).unwrap();
        let forest = RandomForest::fit(&set, &ForestConfig::default().with_trees(5)).unwrap();

        let replay = RandomForest::fit(
            &set,
            &ForestConfig::default().with_trees(5).with_seed(forest.seed()),
        )
        .unwrap();
        for i in 0..set.len() {
            assert_eq!(forest.vote(set.row(i)), replay.vote(set.row(i)));
        }
    }

    #[test]
    fn test_forest_reproduces_training_labels() {
        for mode in Mode::ALL {
            let set = training_set(mode).unwrap();
            let forest = RandomForest::fit(&set, &ForestConfig::default().with_seed(7)).unwrap();

            assert_eq!(forest.n_estimators(), 100);
            for i in 0..set.len() {
                assert_eq!(forest.predict(set.row(i)), set.labels[i], "{} sample {}", mode, i);
            }
        }
    }

    #[test]
    fn test_without_bootstrap_every_tree_fits_all_rows() {
        let set = training_set(Mode::Url).unwrap();
        let config = ForestConfig { bootstrap: false, ..ForestConfig::default().with_seed(3) };
        let forest = RandomForest::fit(&set, &config).unwrap();

        for i in 0..set.len() {
            let vote = forest.vote(set.row(i));
            assert_eq!(vote.confidence(), 1.0);
            let expected = if set.labels[i].is_phishing() { 100 } else { 0 };
            assert_eq!(vote.votes_phishing, expected);
        }
    }

    #[test]
    fn test_stats_describe_binary_trees() {
        let set = training_set(Mode::Url).unwrap();
        let config = ForestConfig::default().with_seed(21).with_trees(20);
        let stats = RandomForest::fit(&set, &config).unwrap().stats();

        // Every split has two children
        assert_eq!(stats.nodes, 2 * stats.leaves - 20);
        assert!(stats.leaves >= 20);
    }

    #[test]
    fn test_max_depth_caps_every_tree() {
        let set = training_set(Mode::Email).unwrap();
        let config = ForestConfig::default().with_seed(4).with_max_depth(Some(1));
        let stats = RandomForest::fit(&set, &config).unwrap().stats();

        assert!(stats.max_depth <= 1);
        assert!(stats.leaves <= 2 * 100);
    }

    #[test]
    fn test_vote_probabilities_sum_to_one() {
        let set = training_set(Mode::Email).unwrap();
        let forest = RandomForest::fit(&set, &ForestConfig::default().with_seed(9)).unwrap();
        let vote = forest.vote(set.row(0));

        let total: f32 = vote.probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-4);
        assert_eq!(vote.votes_total, 100);
    }
}
