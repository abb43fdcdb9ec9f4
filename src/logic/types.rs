//! Core Types
//!
//! Mode (which pipeline) and Label (what it decided).
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DetectorError;

// ============================================================================
// MODE
// ============================================================================

/// Classification domain. Each mode owns one extractor, one dataset, one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Url,
    Email,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Url, Mode::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Url => "url",
            Mode::Email => "email",
        }
    }

    /// Display name used by the front-end ("URL" / "Email")
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Url => "URL",
            Mode::Email => "Email",
        }
    }

    /// Slot in per-mode lookup tables
    pub(crate) fn index(&self) -> usize {
        match self {
            Mode::Url => 0,
            Mode::Email => 1,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DetectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "url" => Ok(Mode::Url),
            "email" => Ok(Mode::Email),
            other => Err(DetectorError::UnknownMode(other.to_string())),
        }
    }
}

// ============================================================================
// LABEL
// ============================================================================

/// Binary label: 0 = benign, 1 = phishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Benign = 0,
    Phishing = 1,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Benign => "benign",
            Label::Phishing => "phishing",
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Class slot used by the forest (0 or 1)
    pub(crate) fn class_index(&self) -> usize {
        *self as usize
    }

    pub(crate) fn from_class_index(index: usize) -> Self {
        if index == 0 {
            Label::Benign
        } else {
            Label::Phishing
        }
    }

    pub fn is_phishing(&self) -> bool {
        matches!(self, Label::Phishing)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_u8()
    }
}

impl TryFrom<u8> for Label {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Benign),
            1 => Ok(Label::Phishing),
            other => Err(other),
        }
    }
}
