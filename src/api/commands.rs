//! Commands - what the front-end calls
//!
//! Validates raw input, calls the detector, maps the label to the message
//! shown to the user. Empty input never reaches the detector.

use serde::{Deserialize, Serialize};

use crate::logic::model::ClassificationResult;
use crate::logic::{Detector, Label, Mode};

/// Warning shown for empty input
pub const EMPTY_INPUT_WARNING: &str = "Please enter a URL or email.";

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Visual tone of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Safe,
    Danger,
}

impl Tone {
    /// ANSI SGR foreground code (green / red)
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Safe => "32",
            Tone::Danger => "31",
        }
    }

    /// `text` wrapped in this tone's terminal colour
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.color(), text)
    }
}

/// Verdict shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub message: String,
    pub tone: Tone,
    pub result: ClassificationResult,
}

/// Outcome of one "Check" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Input was empty after trimming; detector not called
    InputError { warning: String },
    Classified(Verdict),
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Trimmed input, or None when nothing is left
pub fn prepare_input(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// User-facing message for a label
pub fn verdict_message(mode: Mode, label: Label) -> String {
    match label {
        Label::Phishing => format!("⚠️ Phishing {} Detected!", mode.title()),
        Label::Benign => format!("✅ This {} seems safe.", mode.title()),
    }
}

/// Build the verdict for a finished classification
pub fn verdict(result: ClassificationResult) -> Verdict {
    let tone = if result.is_phishing() { Tone::Danger } else { Tone::Safe };
    Verdict {
        message: verdict_message(result.mode, result.label),
        tone,
        result,
    }
}

/// Validate `raw`, classify it in `mode`, and describe the outcome
pub fn check_input(detector: &Detector, mode: Mode, raw: &str) -> CheckOutcome {
    let Some(text) = prepare_input(raw) else {
        log::debug!("Rejected empty input");
        return CheckOutcome::InputError {
            warning: EMPTY_INPUT_WARNING.to_string(),
        };
    };

    CheckOutcome::Classified(verdict(detector.classify(mode, text)))
}
