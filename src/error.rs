//! Error types for the callmatch library.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when looking up contacts for an incoming call.
///
/// A failed lookup for a single call is not retried; the host handles it
/// as "no contact information available" rather than crashing the call path.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The contact store backing the lookup provider is unavailable
    #[error("contact store unavailable: {0}")]
    StoreUnavailable(String),

    /// The provider rejected or failed to execute the suffix query
    #[error("contact store query failed: {0}")]
    QueryFailed(String),

    /// The lookup request itself was invalid (e.g. empty incoming number)
    #[error("invalid lookup request: {0}")]
    InvalidRequest(String),

    /// The background lookup task was cancelled or panicked
    #[error("lookup task failed: {0}")]
    TaskFailed(String),

    /// Generic lookup error with context
    #[error("lookup error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
