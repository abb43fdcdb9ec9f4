//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

use std::str::FromStr;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Phish-Shield";

/// Trees per forest
pub const DEFAULT_N_ESTIMATORS: usize = 100;

/// Smallest node the trees will still try to split
pub const DEFAULT_MIN_SAMPLES_SPLIT: usize = 2;

pub const ENV_TREES: &str = "PHISH_SHIELD_TREES";
pub const ENV_SEED: &str = "PHISH_SHIELD_SEED";
pub const ENV_MAX_DEPTH: &str = "PHISH_SHIELD_MAX_DEPTH";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get tree count from environment or use default
pub fn get_n_estimators() -> usize {
    env_positive(ENV_TREES).unwrap_or(DEFAULT_N_ESTIMATORS)
}

/// Get forest seed from environment (unset = unseeded)
pub fn get_seed() -> Option<u64> {
    std::env::var(ENV_SEED).ok().and_then(|raw| parse_value(ENV_SEED, &raw))
}

/// Get maximum tree depth from environment (unset = unlimited)
pub fn get_max_depth() -> Option<usize> {
    env_positive(ENV_MAX_DEPTH)
}

fn env_positive(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    parse_positive(name, &raw)
}

/// Parse a set variable; a value that doesn't parse is logged and dropped
fn parse_value<T: FromStr>(name: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a valid number", name, raw);
            None
        }
    }
}

fn parse_positive(name: &str, raw: &str) -> Option<usize> {
    let value = parse_value::<usize>(name, raw)?;
    if value == 0 {
        log::warn!("Ignoring {}=0: must be greater than zero", name);
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_trims() {
        assert_eq!(parse_value::<u64>(ENV_SEED, " 42\n"), Some(42));
    }

    #[test]
    fn test_unparsable_values_are_dropped() {
        assert_eq!(parse_value::<u64>(ENV_SEED, "forty-two"), None);
        assert_eq!(parse_value::<u64>(ENV_SEED, "-1"), None);
        assert_eq!(parse_value::<u64>(ENV_SEED, ""), None);
    }

    #[test]
    fn test_parse_positive_rejects_zero() {
        assert_eq!(parse_positive(ENV_TREES, "0"), None);
        assert_eq!(parse_positive(ENV_TREES, "abc"), None);
        assert_eq!(parse_positive(ENV_MAX_DEPTH, "8"), Some(8));
    }
}
