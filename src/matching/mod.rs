//! Phone-number equivalence and incoming-call matching.

pub mod matcher;
pub mod normalizer;

pub use matcher::{IncomingCallMatcher, DEFAULT_MAX_CANDIDATES, DEFAULT_SUFFIX_LENGTH};
pub use normalizer::{
    are_equivalent, calling_code, normalize, NormalizationFailure, NormalizedNumber,
};
