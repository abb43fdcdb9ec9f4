//! Detector - the train-then-classify entry point
//!
//! `initialize` trains both pipelines before a `Detector` exists, so there is
//! no way to classify against a model that has not finished fitting. After
//! that the detector is read-only and can be shared freely.

use super::config::DetectorConfig;
use super::features::{extractor_for, FeatureExtractor, FeatureVector};
use super::model::{self, ClassificationResult, ModelInfo, TrainedModel};
use super::types::{Label, Mode};
use crate::error::{DetectorError, DetectorResult};

/// Extractor + model for one mode
struct Pipeline {
    extractor: &'static dyn FeatureExtractor,
    model: TrainedModel,
}

impl Pipeline {
    fn train(mode: Mode, config: &DetectorConfig) -> DetectorResult<Self> {
        let model = model::train_mode(mode, config.for_mode(mode))
            .map_err(|source| DetectorError::Training { mode, source })?;
        Ok(Self {
            extractor: extractor_for(mode),
            model,
        })
    }
}

/// Both trained pipelines, indexed by `Mode`
pub struct Detector {
    pipelines: [Pipeline; 2],
}

impl Detector {
    /// Train the URL and email models from the embedded datasets
    pub fn initialize(config: &DetectorConfig) -> DetectorResult<Self> {
        log::info!("Training detectors...");

        let url = Pipeline::train(Mode::Url, config)?;
        let email = Pipeline::train(Mode::Email, config)?;

        Ok(Self::from_pipelines([url, email]))
    }

    /// Wrap already trained models
    pub fn from_models(url: TrainedModel, email: TrainedModel) -> DetectorResult<Self> {
        for (expected, model) in [(Mode::Url, &url), (Mode::Email, &email)] {
            if model.mode() != expected {
                return Err(DetectorError::ModeMismatch {
                    expected,
                    actual: model.mode(),
                });
            }
        }

        Ok(Self::from_pipelines([
            Pipeline { extractor: extractor_for(Mode::Url), model: url },
            Pipeline { extractor: extractor_for(Mode::Email), model: email },
        ]))
    }

    fn from_pipelines(pipelines: [Pipeline; 2]) -> Self {
        debug_assert!(Mode::ALL.iter().all(|m| {
            let p = &pipelines[m.index()];
            p.extractor.mode() == *m && p.model.mode() == *m
        }));
        Self { pipelines }
    }

    fn pipeline(&self, mode: Mode) -> &Pipeline {
        &self.pipelines[mode.index()]
    }

    /// Classify `text` with the pipeline of `mode`. Never fails.
    pub fn classify(&self, mode: Mode, text: &str) -> ClassificationResult {
        let pipeline = self.pipeline(mode);
        let vector = pipeline.extractor.extract(text);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Features: {}", vector.to_log_entry());
        }

        let result = model::predict(&pipeline.model, &vector);
        log::debug!(
            "Classified {} input as {} (confidence {:.2}, {}/{} trees)",
            mode,
            result.label,
            result.confidence,
            result.votes_phishing,
            result.votes_total
        );
        result
    }

    /// Label only
    pub fn predict(&self, mode: Mode, text: &str) -> Label {
        self.classify(mode, text).label
    }

    /// Feature vector the pipeline of `mode` would score
    pub fn extract(&self, mode: Mode, text: &str) -> FeatureVector {
        self.pipeline(mode).extractor.extract(text)
    }

    pub fn model(&self, mode: Mode) -> &TrainedModel {
        &self.pipeline(mode).model
    }

    pub fn model_info(&self, mode: Mode) -> &ModelInfo {
        self.model(mode).info()
    }
}

/// Train both models with the environment configuration
pub fn initialize() -> DetectorResult<Detector> {
    Detector::initialize(&DetectorConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dataset::samples;
    use crate::logic::features::LayoutInfo;

    fn detector() -> Detector {
        Detector::initialize(&DetectorConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn test_known_phishing_url() {
        assert_eq!(detector().predict(Mode::Url, "http://paypal-login.tk"), Label::Phishing);
    }

    #[test]
    fn test_known_benign_email() {
        let text = "Meeting confirmed for tomorrow. Please find agenda attached.";
        assert_eq!(detector().predict(Mode::Email, text), Label::Benign);
    }

    #[test]
    fn test_every_training_sample_is_reproduced() {
        let detector = detector();
        for mode in Mode::ALL {
            for sample in samples(mode) {
                assert_eq!(detector.predict(mode, sample.text), sample.label, "{}", sample.text);
            }
        }
    }

    #[test]
    fn test_classify_is_total() {
        let detector = detector();
        for text in ["", "   ", "\t\n", "ありがとう", "😀😀😀", "@@@---...", "\u{0}"] {
            for mode in Mode::ALL {
                let result = detector.classify(mode, text);
                assert_eq!(result.mode, mode);
                assert!(result.confidence >= 0.5);
            }
        }
    }

    #[test]
    fn test_models_are_per_mode() {
        let detector = detector();
        assert_eq!(detector.model(Mode::Url).mode(), Mode::Url);
        assert_eq!(detector.model_info(Mode::Email).feature_count, 6);
        assert_eq!(detector.extract(Mode::Url, "a.b").len(), 7);
    }

    #[test]
    fn test_models_match_current_layouts() {
        let detector = detector();
        for mode in Mode::ALL {
            let layout = LayoutInfo::current(mode);
            let info = detector.model_info(mode);
            assert_eq!(info.layout_hash, layout.hash);
            assert_eq!(info.feature_version, layout.version);
            assert_eq!(info.feature_count, layout.feature_names.len());
        }
    }

    #[test]
    fn test_from_models_rejects_swapped_slots() {
        let config = DetectorConfig::default().with_seed(1).with_trees(5);
        let url = model::train_mode(Mode::Url, &config.url).unwrap();
        let email = model::train_mode(Mode::Email, &config.email).unwrap();

        assert!(Detector::from_models(email.clone(), url.clone()).is_err());
        assert!(Detector::from_models(url, email).is_ok());
    }

    #[test]
    fn test_detector_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Detector>();
    }
}
