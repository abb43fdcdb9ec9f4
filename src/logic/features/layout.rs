//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema of both pipelines**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment the layout version
//! 2. Change order → increment the layout version
//! 3. Remove feature → increment the layout version
//!
//! The forest indexes features positionally, so a vector built against one
//! layout must never be fed to a model trained on another.

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::logic::types::Mode;

// ============================================================================
// FEATURE LAYOUTS (Authoritative source)
// ============================================================================

/// Current layout version, shared by both modes
pub const FEATURE_VERSION: u8 = 1;

/// URL feature names in vector order
pub const URL_FEATURE_LAYOUT: &[&str] = &[
    "url_length",         // 0: character count
    "count_dots",         // 1: '.'
    "count_hyphens",      // 2: '-'
    "count_at",           // 3: '@'
    "has_https",          // 4: starts with "https"
    "count_digits",       // 5: Unicode decimal digits (Nd)
    "has_suspicious_tld", // 6: .tk / .ml / .ga / .cf / .gq
];

/// Email feature names in vector order
pub const EMAIL_FEATURE_LAYOUT: &[&str] = &[
    "contains_urgent",   // 0: urgency vocabulary
    "contains_login",    // 1: "login" / "log in"
    "contains_update",   // 2: "account update"
    "contains_password", // 3: "password"
    "contains_link",     // 4: http://, https://, www.
    "length",            // 5: character count (lower-cased)
];

/// IMPORTANT: Must match URL_FEATURE_LAYOUT.len()!
pub const URL_FEATURE_COUNT: usize = 7;

/// IMPORTANT: Must match EMAIL_FEATURE_LAYOUT.len()!
pub const EMAIL_FEATURE_COUNT: usize = 6;

static URL_LAYOUT_HASH: Lazy<u32> = Lazy::new(|| compute_layout_hash(Mode::Url));
static EMAIL_LAYOUT_HASH: Lazy<u32> = Lazy::new(|| compute_layout_hash(Mode::Email));

// ============================================================================
// LOOKUPS
// ============================================================================

/// Feature names for a mode
pub fn feature_layout(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Url => URL_FEATURE_LAYOUT,
        Mode::Email => EMAIL_FEATURE_LAYOUT,
    }
}

/// Number of features for a mode
pub fn feature_count(mode: Mode) -> usize {
    match mode {
        Mode::Url => URL_FEATURE_COUNT,
        Mode::Email => EMAIL_FEATURE_COUNT,
    }
}

/// Get feature index by name
pub fn feature_index(mode: Mode, name: &str) -> Option<usize> {
    feature_layout(mode).iter().position(|&n| n == name)
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over version, mode and ordered feature names
pub fn compute_layout_hash(mode: Mode) -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);
    hasher.update(mode.as_str().as_bytes());
    hasher.update(&[0]);

    for name in feature_layout(mode) {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Cached layout hash
pub fn layout_hash(mode: Mode) -> u32 {
    match mode {
        Mode::Url => *URL_LAYOUT_HASH,
        Mode::Email => *EMAIL_LAYOUT_HASH,
    }
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for logging / model metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub mode: Mode,
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current(mode: Mode) -> Self {
        Self {
            mode,
            version: FEATURE_VERSION,
            hash: layout_hash(mode),
            feature_count: feature_count(mode),
            feature_names: feature_layout(mode).iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a vector was built against a different layout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Feature layout mismatch for {mode}: expected v{expected_version} (hash: {expected_hash:08x}), \
     got v{actual_version} (hash: {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub mode: Mode,
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

/// Validate that incoming data matches the current layout of `mode`
pub fn validate_layout(
    mode: Mode,
    incoming_version: u8,
    incoming_hash: u32,
) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash(mode);

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            mode,
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}
