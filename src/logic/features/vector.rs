//! Feature Vector - Core data structure for model input
//!
//! **Versioned feature vector with layout validation**
//!
//! Each vector carries the mode it was built for plus the layout version and
//! hash, so a URL vector can never silently be scored by the email model.

use serde::{Deserialize, Serialize};

use super::layout::{
    feature_count, feature_index, feature_layout, layout_hash, validate_layout,
    LayoutMismatchError, FEATURE_VERSION,
};
use crate::logic::types::Mode;

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned Feature Vector with layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Pipeline this vector belongs to
    pub mode: Mode,
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in layout order
    pub values: Vec<f32>,
}

impl FeatureVector {
    /// Zeroed vector with the current layout of `mode`
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            version: FEATURE_VERSION,
            layout_hash: layout_hash(mode),
            values: vec![0.0; feature_count(mode)],
        }
    }

    /// Create from raw values (truncates or pads to the layout width)
    pub fn from_values(mode: Mode, values: &[f32]) -> Self {
        let mut vector = Self::new(mode);
        for (slot, v) in vector.values.iter_mut().zip(values.iter()) {
            *slot = *v;
        }
        vector
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(self.mode, name).and_then(|i| self.get(i))
    }

    /// Validate that this vector is compatible with the current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.mode, self.version, self.layout_hash)
    }

    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok() && self.values.len() == feature_count(self.mode)
    }

    pub fn feature_names(&self) -> &'static [&'static str] {
        feature_layout(self.mode)
    }

    /// Named (feature, value) pairs in layout order
    pub fn named_values(&self) -> Vec<(&'static str, f32)> {
        self.feature_names()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect()
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let named: serde_json::Map<String, serde_json::Value> = self
            .named_values()
            .into_iter()
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();

        serde_json::json!({
            "mode": self.mode,
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "values": self.values,
            "named_values": named,
        })
    }
}

// ============================================================================
// FEATURE EXTRACTOR TRAIT
// ============================================================================

/// Pure text → feature vector mapping for one mode
pub trait FeatureExtractor: Send + Sync {
    /// Mode whose layout this extractor fills
    fn mode(&self) -> Mode;

    /// Extract the feature vector for `text`. Total on every input.
    fn extract(&self, text: &str) -> FeatureVector;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_new() {
        let vector = FeatureVector::new(Mode::Url);
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash(Mode::Url));
        assert_eq!(vector.len(), 7);
        assert!(vector.values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_from_values_pads_and_truncates() {
        let short = FeatureVector::from_values(Mode::Email, &[1.0, 2.0]);
        assert_eq!(short.values, vec![1.0, 2.0, 0.0, 0.0, 0.0, 0.0]);

        let long = FeatureVector::from_values(Mode::Email, &[1.0; 10]);
        assert_eq!(long.len(), 6);
    }

    #[test]
    fn test_get_by_name() {
        let vector = FeatureVector::from_values(Mode::Email, &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(vector.get_by_name("contains_password"), Some(1.0));
        assert_eq!(vector.get_by_name("count_dots"), None);
    }

    #[test]
    fn test_validation() {
        let mut vector = FeatureVector::new(Mode::Url);
        assert!(vector.is_compatible());

        vector.layout_hash = layout_hash(Mode::Email);
        assert!(!vector.is_compatible());
    }

    #[test]
    fn test_to_log_entry() {
        let vector = FeatureVector::from_values(Mode::Url, &[20.0, 3.0]);

        let log = vector.to_log_entry();
        assert_eq!(log["mode"], "url");
        assert_eq!(log["feature_version"], FEATURE_VERSION);
        assert_eq!(log["named_values"]["count_dots"], 3.0);
    }
}
