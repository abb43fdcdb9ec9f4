//! Logic Module - Detection Engine
//!
//! - `features/` - text → feature vector, one layout per mode
//! - `dataset/` - embedded labelled samples and training sets
//! - `model/` - random forest training & inference
//! - `detector` - trains both pipelines, classifies requests

pub mod config;
pub mod dataset;
pub mod detector;
pub mod features;
pub mod model;
pub mod types;

pub use config::DetectorConfig;
pub use detector::{initialize, Detector};
pub use types::{Label, Mode};
