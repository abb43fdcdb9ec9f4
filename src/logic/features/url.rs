//! URL Feature Extraction
//!
//! Naive lexical heuristics over the raw string. No URL parsing or
//! validation: anything goes in, seven numbers come out.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::layout::URL_FEATURE_COUNT;
use super::vector::{FeatureExtractor, FeatureVector};
use crate::logic::types::Mode;

/// TLDs commonly handed out for free and abused by phishing kits
pub const SUSPICIOUS_TLDS: [&str; 5] = [".tk", ".ml", ".ga", ".cf", ".gq"];

/// Lexical features of a URL, in layout order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlFeatures {
    pub url_length: usize,
    pub count_dots: usize,
    pub count_hyphens: usize,
    pub count_at: usize,
    pub has_https: bool,
    pub count_digits: usize,
    pub has_suspicious_tld: bool,
}

impl UrlFeatures {
    pub fn from_text(url: &str) -> Self {
        let mut features = Self {
            has_https: url.starts_with("https"),
            has_suspicious_tld: SUSPICIOUS_TLDS.iter().any(|tld| url.contains(tld)),
            ..Self::default()
        };

        for c in url.chars() {
            features.url_length += 1;
            match c {
                '.' => features.count_dots += 1,
                '-' => features.count_hyphens += 1,
                '@' => features.count_at += 1,
                c if is_decimal_digit(c) => features.count_digits += 1,
                _ => {}
            }
        }

        features
    }

    pub fn to_array(&self) -> [f32; URL_FEATURE_COUNT] {
        [
            self.url_length as f32,
            self.count_dots as f32,
            self.count_hyphens as f32,
            self.count_at as f32,
            flag(self.has_https),
            self.count_digits as f32,
            flag(self.has_suspicious_tld),
        ]
    }

    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector::from_values(Mode::Url, &self.to_array())
    }
}

/// Any Unicode decimal digit (category Nd), not only ASCII 0-9
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c.general_category() == GeneralCategory::DecimalNumber
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Extractor for the URL pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlExtractor;

impl FeatureExtractor for UrlExtractor {
    fn mode(&self) -> Mode {
        Mode::Url
    }

    fn extract(&self, text: &str) -> FeatureVector {
        UrlFeatures::from_text(text).to_vector()
    }
}

/// Extract the URL feature vector of `url`
pub fn extract_url_features(url: &str) -> FeatureVector {
    UrlExtractor.extract(url)
}
