//! Callmatch - incoming-call contact matching for private contact stores.
//!
//! When a call comes in, this library takes the raw caller-ID string and an
//! optional default country hint, finds the locally stored contacts whose
//! phone numbers are equivalent to the incoming number, and returns them as
//! a capped, name-ordered candidate list for the call screen.
//!
//! Matching is a two-phase search: a cheap digit-suffix pre-filter answered
//! by the host's contact store, then a precise, format-insensitive
//! equivalence comparison in memory. The whole operation is stateless and
//! read-only; candidates are built fresh per call event and discarded.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (contact IDs, phone numbers)
//! - **models**: read-only contact projections used during matching
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **matching**: phone-number normalization, equivalence, and the matcher
//! - **repositories**: the contact lookup abstraction the matcher queries
//! - **services**: per-call-event orchestration on background tasks
//! - **metrics**: lookup counters and timing

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, LookupError};
pub use matching::{
    are_equivalent, normalize, IncomingCallMatcher, NormalizationFailure, NormalizedNumber,
};
pub use metrics::{LookupTimer, Metrics, MetricsSummary};
pub use models::ContactWithPhoneNumbers;
pub use repositories::ContactLookupProvider;
pub use services::{CallLookupService, CallLookupServiceImpl};
