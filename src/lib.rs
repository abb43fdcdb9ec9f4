//! Phish-Shield - URL & Email Phishing Detector
//!
//! Trains two small random forests at startup (one for URLs, one for email
//! bodies) on embedded samples, then classifies single texts.
//!
//! ```no_run
//! use phish_shield::{Detector, DetectorConfig, Mode};
//!
//! let detector = Detector::initialize(&DetectorConfig::default())?;
//! let result = detector.classify(Mode::Url, "http://paypal-login.tk");
//! println!("{} ({:.0}%)", result.label, result.confidence * 100.0);
//! # Ok::<(), phish_shield::DetectorError>(())
//! ```

pub mod constants;
pub mod error;
pub mod logic;
pub mod api;

pub use error::{DetectorError, DetectorResult, TrainingError};
pub use logic::features::{extract_email_features, extract_url_features, FeatureVector};
pub use logic::model::ClassificationResult;
pub use logic::{initialize, Detector, DetectorConfig, Label, Mode};
