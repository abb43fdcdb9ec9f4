//! End-to-end checks of the public initialize / classify boundary

use phish_shield::api::{check_input, CheckOutcome};
use phish_shield::{
    extract_email_features, extract_url_features, Detector, DetectorConfig, Label, Mode,
};

fn detector() -> Detector {
    Detector::initialize(&DetectorConfig::default().with_seed(1234)).expect("training failed")
}

#[test]
fn test_url_feature_scenarios() {
    let google = extract_url_features("https://google.com");
    assert_eq!(google.values, vec![18.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    let fake = extract_url_features("http://verify-apple.com-login.tk");
    assert_eq!(fake.get_by_name("has_suspicious_tld"), Some(1.0));
    assert_eq!(fake.get_by_name("has_https"), Some(0.0));
}

#[test]
fn test_email_feature_scenario() {
    let v = extract_email_features("URGENT: verify your PASSWORD now");
    assert_eq!(v.get_by_name("contains_urgent"), Some(1.0));
    assert_eq!(v.get_by_name("contains_password"), Some(1.0));
    assert_eq!(v.get_by_name("contains_link"), Some(0.0));
}

#[test]
fn test_training_sample_classified_as_phishing() {
    assert_eq!(detector().predict(Mode::Url, "http://paypal-login.tk"), Label::Phishing);
}

#[test]
fn test_meeting_email_classified_as_benign() {
    let text = "Meeting confirmed for tomorrow. Please find agenda attached.";
    assert_eq!(detector().predict(Mode::Email, text), Label::Benign);
}

#[test]
fn test_classify_accepts_any_text() {
    let detector = detector();
    let long = "x".repeat(10_000);
    for text in ["", " ", "\u{200b}", "Ünïcödé @ 数字 123", long.as_str()] {
        for mode in Mode::ALL {
            let result = detector.classify(mode, text);
            assert!(matches!(result.label, Label::Benign | Label::Phishing));
        }
    }
}

#[test]
fn test_presentation_round_trip() {
    let detector = detector();

    match check_input(&detector, Mode::Email, "\n\t ") {
        CheckOutcome::InputError { warning } => assert_eq!(warning, "Please enter a URL or email."),
        other => panic!("unexpected outcome: {:?}", other),
    }

    match check_input(&detector, Mode::Url, " http://paypal-login.tk ") {
        CheckOutcome::Classified(verdict) => {
            assert_eq!(verdict.message, "⚠️ Phishing URL Detected!")
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_independent_detectors_agree_on_training_data() {
    let a = Detector::initialize(&DetectorConfig::default().with_seed(1)).unwrap();
    let b = Detector::initialize(&DetectorConfig::default().with_seed(2)).unwrap();

    let cases = [
        (Mode::Url, "https://amazon.com"),
        (Mode::Url, "http://malicious-verify-id.cf"),
        (Mode::Email, "Your Amazon order has been shipped"),
        (Mode::Email, "Click here to update your password: http://fake-login.com"),
    ];
    for (mode, text) in cases {
        assert_eq!(a.predict(mode, text), b.predict(mode, text), "{}", text);
    }
}
