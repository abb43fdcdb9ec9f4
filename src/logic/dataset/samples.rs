//! Embedded training samples
//!
//! The entire supervised signal of the detector. Content and labels must stay
//! exactly as they are: the classification scenarios in the tests rely on them.

use crate::logic::types::Label;

/// One labelled text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub text: &'static str,
    pub label: Label,
}

const fn phishing(text: &'static str) -> Sample {
    Sample { text, label: Label::Phishing }
}

const fn benign(text: &'static str) -> Sample {
    Sample { text, label: Label::Benign }
}

/// 10 URLs: 6 phishing, 4 benign
pub static URL_SAMPLES: [Sample; 10] = [
    phishing("http://paypal-login.tk"),
    phishing("https://secure-facebook.com-login"),
    phishing("http://apple.support.account-update.ga"),
    benign("https://google.com"),
    benign("https://haideramin989.medium.com"),
    benign("https://amazon.com"),
    phishing("http://verify-apple.com-login.tk"),
    benign("https://facebook.com"),
    benign("https://paypal.com"),
    phishing("http://malicious-verify-id.cf"),
];

/// 6 emails: 3 phishing, 3 benign
pub static EMAIL_SAMPLES: [Sample; 6] = [
    phishing("Your account is suspended. Please verify immediately at http://suspicious.tk"),
    phishing("Click here to update your password: http://fake-login.com"),
    phishing("Important: Log in to your account now to avoid closure"),
    benign("Meeting confirmed for tomorrow. Please find agenda attached."),
    benign("Here is the receipt for your recent purchase"),
    benign("Your Amazon order has been shipped"),
];
