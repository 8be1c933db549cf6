//! Incoming-call contact matching.
//!
//! Orchestrates the two-phase search for a ringing call: a cheap suffix
//! pre-filter delegated to the lookup provider, then the precise
//! equivalence comparison in memory, followed by capping and ordering
//! for display.

use crate::error::LookupResult;
use crate::matching::normalizer::are_equivalent;
use crate::metrics::Metrics;
use crate::models::ContactWithPhoneNumbers;
use crate::repositories::ContactLookupProvider;
use std::sync::Arc;
use tracing::debug;

/// Number of trailing digits handed to the provider's suffix query.
///
/// Must stay at or below the shortest plausible phone number length so the
/// pre-filter can never exclude a true match before the precise check runs.
pub const DEFAULT_SUFFIX_LENGTH: usize = 4;

/// Display limit for "possible caller" candidates.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// Matcher for incoming-call contact lookup.
///
/// Stateless across calls: every invocation builds its candidate list
/// fresh from the provider and discards it after use. Holds no locks and
/// performs no writes, so an in-flight lookup may simply be abandoned
/// when the call ends.
pub struct IncomingCallMatcher {
    provider: Arc<dyn ContactLookupProvider>,
    suffix_length: usize,
    max_candidates: usize,
    metrics: Option<Metrics>,
}

impl IncomingCallMatcher {
    /// Create a matcher over the given lookup provider.
    ///
    /// # Arguments
    /// * `provider` - contact lookup abstraction backed by the host's store
    /// * `suffix_length` - trailing digits used for the provider pre-filter
    /// * `max_candidates` - cap on the number of returned candidates
    pub fn new(
        provider: Arc<dyn ContactLookupProvider>,
        suffix_length: usize,
        max_candidates: usize,
    ) -> Self {
        Self {
            provider,
            suffix_length,
            max_candidates,
            metrics: None,
        }
    }

    /// Create a matcher with the stock suffix length and candidate cap.
    pub fn with_defaults(provider: Arc<dyn ContactLookupProvider>) -> Self {
        Self::new(provider, DEFAULT_SUFFIX_LENGTH, DEFAULT_MAX_CANDIDATES)
    }

    /// Attach a metrics collector for candidate/match counters.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// The digit suffix used to pre-filter candidates for `incoming_number`.
    ///
    /// Computed over the digit-only form of the incoming number; an incoming
    /// number with fewer digits than the configured length yields the whole
    /// digit string.
    pub fn number_suffix(&self, incoming_number: &str) -> String {
        let digits: String = incoming_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        if digits.len() <= self.suffix_length {
            digits
        } else {
            digits[digits.len() - self.suffix_length..].to_string()
        }
    }

    /// Find the stored contacts whose numbers are equivalent to the caller's.
    ///
    /// 1. Pre-filter: ask the provider for contacts with a number ending on
    ///    the last digits of `incoming_number`.
    /// 2. Precise filter: keep a candidate iff at least one of its stored
    ///    numbers is equivalent to the incoming number, with
    ///    `default_country_iso` as the formatting hint.
    /// 3. Cap the list, then sort it by display name for a deterministic,
    ///    human-scannable result.
    ///
    /// An empty result is a valid outcome, not an error. Provider failures
    /// propagate to the caller without retries.
    pub async fn find_corresponding_contacts(
        &self,
        incoming_number: &str,
        default_country_iso: Option<&str>,
    ) -> LookupResult<Vec<ContactWithPhoneNumbers>> {
        let suffix = self.number_suffix(incoming_number);
        if suffix.is_empty() {
            // Nothing could pass the precise filter either
            debug!(incoming_number, "incoming number carries no digits");
            return Ok(Vec::new());
        }

        let candidates = self
            .provider
            .find_contacts_with_number_ending_on(&suffix)
            .await?;
        debug!(
            suffix = %suffix,
            candidates = candidates.len(),
            "suffix pre-filter complete"
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_candidates_fetched(candidates.len());
        }

        let mut matches: Vec<ContactWithPhoneNumbers> = candidates
            .into_iter()
            .filter(|contact| {
                contact.phone_numbers.iter().any(|phone| {
                    are_equivalent(phone.value(), incoming_number, default_country_iso)
                })
            })
            .collect();

        matches.truncate(self.max_candidates);
        matches.sort_by(|a, b| a.display_name().cmp(&b.display_name()));

        if let Some(metrics) = &self.metrics {
            metrics.record_matches_returned(matches.len());
        }
        debug!(matches = matches.len(), "incoming-call matching complete");
        Ok(matches)
    }
}
