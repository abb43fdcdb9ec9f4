//! Features Module - Feature Extraction Engine
//!
//! Turns raw text into fixed-order numeric vectors, one layout per mode.

pub mod email;
pub mod layout;
pub mod url;
pub mod vector;


// Re-export common types
pub use email::{extract_email_features, EmailExtractor, EmailFeatures};
pub use layout::{feature_count, layout_hash, LayoutInfo, LayoutMismatchError, FEATURE_VERSION};
pub use url::{extract_url_features, UrlExtractor, UrlFeatures};
pub use vector::{FeatureExtractor, FeatureVector};

use crate::logic::types::Mode;

/// Extractor for `mode`
pub fn extractor_for(mode: Mode) -> &'static dyn FeatureExtractor {
    match mode {
        Mode::Url => &UrlExtractor,
        Mode::Email => &EmailExtractor,
    }
}

/// Extract features of `text` for `mode`
pub fn extract(mode: Mode, text: &str) -> FeatureVector {
    extractor_for(mode).extract(text)
}
