//! Email Feature Extraction
//!
//! Keyword flags over the lower-cased body, plus its length.

use super::layout::EMAIL_FEATURE_COUNT;
use super::vector::{FeatureExtractor, FeatureVector};
use crate::logic::types::Mode;

/// Pressure vocabulary
pub const URGENT_WORDS: [&str; 5] = ["urgent", "immediately", "suspended", "verify", "warning"];

pub const LOGIN_WORDS: [&str; 2] = ["login", "log in"];

pub const UPDATE_PHRASE: &str = "account update";

pub const PASSWORD_WORD: &str = "password";

pub const LINK_MARKERS: [&str; 3] = ["http://", "https://", "www."];

/// Keyword features of an email body, in layout order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailFeatures {
    pub contains_urgent: bool,
    pub contains_login: bool,
    pub contains_update: bool,
    pub contains_password: bool,
    pub contains_link: bool,
    pub length: usize,
}

impl EmailFeatures {
    pub fn from_text(email: &str) -> Self {
        let email = email.to_lowercase();
        let contains_any = |words: &[&str]| words.iter().any(|w| email.contains(w));

        Self {
            contains_urgent: contains_any(&URGENT_WORDS[..]),
            contains_login: contains_any(&LOGIN_WORDS[..]),
            contains_update: email.contains(UPDATE_PHRASE),
            contains_password: email.contains(PASSWORD_WORD),
            contains_link: contains_any(&LINK_MARKERS[..]),
            length: email.chars().count(),
        }
    }

    pub fn to_array(&self) -> [f32; EMAIL_FEATURE_COUNT] {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        [
            flag(self.contains_urgent),
            flag(self.contains_login),
            flag(self.contains_update),
            flag(self.contains_password),
            flag(self.contains_link),
            self.length as f32,
        ]
    }

    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector::from_values(Mode::Email, &self.to_array())
    }
}

/// Extractor for the email pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl FeatureExtractor for EmailExtractor {
    fn mode(&self) -> Mode {
        Mode::Email
    }

    fn extract(&self, text: &str) -> FeatureVector {
        EmailFeatures::from_text(text).to_vector()
    }
}

/// Extract the email feature vector of `email`
pub fn extract_email_features(email: &str) -> FeatureVector {
    EmailExtractor.extract(email)
}
