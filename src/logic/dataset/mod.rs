//! Dataset Module - Embedded Training Data
//!
//! Static labelled samples per mode and the training sets built from them.

pub mod samples;
pub mod training_set;


use sha2::{Digest, Sha256};

pub use samples::{Sample, EMAIL_SAMPLES, URL_SAMPLES};
pub use training_set::TrainingSet;

use crate::error::TrainingError;
use crate::logic::types::Mode;

/// Samples for a mode
pub fn samples(mode: Mode) -> &'static [Sample] {
    match mode {
        Mode::Url => &URL_SAMPLES,
        Mode::Email => &EMAIL_SAMPLES,
    }
}

/// Training set built from the embedded samples of `mode`
pub fn training_set(mode: Mode) -> Result<TrainingSet, TrainingError> {
    TrainingSet::build(mode, samples(mode))
}

/// SHA-256 over (label, text) pairs, hex encoded
pub fn fingerprint(samples: &[Sample]) -> String {
    let mut hasher = Sha256::new();
    for sample in samples {
        hasher.update([sample.label.as_u8()]);
        hasher.update(sample.text.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
