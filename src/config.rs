//! Configuration management for the callmatch library.
//!
//! This module handles loading and validating configuration from environment
//! variables. All keys are optional; the defaults are the values the matcher
//! shipped with originally (4-digit suffix, 5 candidates).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Upper bound for the suffix pre-filter length.
///
/// The suffix must stay at or below the shortest plausible phone number
/// length, otherwise the pre-filter could exclude a true match before the
/// precise equivalence check ever runs.
const MAX_SUFFIX_LENGTH: usize = 7;

/// Configuration for incoming-call matching.
#[derive(Debug, Clone)]
pub struct Config {
    /// Trailing digits used for the provider-side pre-filter (default: 4)
    pub suffix_length: usize,

    /// Maximum number of candidates returned to the call screen (default: 5)
    pub max_candidates: usize,

    /// Two-letter ISO country code used to interpret nationally-formatted
    /// numbers; None disables country resolution (default: unset)
    pub default_country_iso: Option<String>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CALLMATCH_SUFFIX_LENGTH`: pre-filter suffix length, 1-7 (default: 4)
    /// - `CALLMATCH_MAX_CANDIDATES`: candidate cap, at least 1 (default: 5)
    /// - `CALLMATCH_DEFAULT_COUNTRY`: two-letter ISO country code (default: unset)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; a missing file is not an error
        let _ = dotenvy::dotenv();

        let suffix_length = Self::parse_env_usize("CALLMATCH_SUFFIX_LENGTH", 4)?;
        if suffix_length == 0 || suffix_length > MAX_SUFFIX_LENGTH {
            return Err(ConfigError::InvalidValue {
                var: "CALLMATCH_SUFFIX_LENGTH".to_string(),
                reason: format!("Must be between 1 and {}", MAX_SUFFIX_LENGTH),
            });
        }

        let max_candidates = Self::parse_env_usize("CALLMATCH_MAX_CANDIDATES", 5)?;
        if max_candidates == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CALLMATCH_MAX_CANDIDATES".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let default_country_iso = match env::var("CALLMATCH_DEFAULT_COUNTRY") {
            Ok(val) => {
                let iso = val.trim().to_ascii_lowercase();
                if iso.len() != 2 || !iso.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ConfigError::InvalidValue {
                        var: "CALLMATCH_DEFAULT_COUNTRY".to_string(),
                        reason: format!("Must be a two-letter ISO code, got: {}", val),
                    });
                }
                Some(iso)
            }
            Err(_) => None,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            suffix_length,
            max_candidates,
            default_country_iso,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            suffix_length: 4,
            max_candidates: 5,
            default_country_iso: None,
            log_level: "error".to_string(),
        }
    }
}
