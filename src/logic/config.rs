//! Detector Configuration
//!
//! One forest config per mode. Defaults come from `constants`, the
//! environment can override them, CLI flags override the environment.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::model::ForestConfig;
use crate::logic::types::Mode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub url: ForestConfig,
    pub email: ForestConfig,
}

impl DetectorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let forest = ForestConfig {
            n_estimators: constants::get_n_estimators(),
            seed: constants::get_seed(),
            ..ForestConfig::default()
        }
        .with_max_depth(constants::get_max_depth());

        Self {
            url: forest.clone(),
            email: forest,
        }
    }

    pub fn for_mode(&self, mode: Mode) -> &ForestConfig {
        match mode {
            Mode::Url => &self.url,
            Mode::Email => &self.email,
        }
    }

    /// Same seed for both forests
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.url.seed = Some(seed);
        self.email.seed = Some(seed);
        self
    }

    pub fn with_trees(mut self, n_estimators: usize) -> Self {
        self.url.n_estimators = n_estimators;
        self.email.n_estimators = n_estimators;
        self
    }

    /// Depth limit for both forests (None = grow until pure)
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.url = self.url.with_max_depth(max_depth);
        self.email = self.email.with_max_depth(max_depth);
        self
    }
}
