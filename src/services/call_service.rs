//! Incoming-call lookup service.
//!
//! Entry point for the host's call-event listener. Each ringing call
//! triggers exactly one lookup, executed on a background Tokio task so
//! the thread dispatching call notifications is never blocked by the
//! provider's storage I/O.

use crate::config::Config;
use crate::error::{LookupError, LookupResult};
use crate::matching::IncomingCallMatcher;
use crate::metrics::{LookupTimer, Metrics};
use crate::models::ContactWithPhoneNumbers;
use crate::repositories::ContactLookupProvider;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Call lookup service trait for the host's call-handling layer.
#[async_trait]
pub trait CallLookupService: Send + Sync {
    /// Find the contacts matching the caller-ID string of a ringing call.
    ///
    /// Returns the ranked candidate list; an empty list means "no contact
    /// information available" and is not an error.
    async fn lookup_incoming_call(
        &self,
        incoming_number: &str,
    ) -> LookupResult<Vec<ContactWithPhoneNumbers>>;
}

/// Default implementation of CallLookupService.
pub struct CallLookupServiceImpl {
    matcher: Arc<IncomingCallMatcher>,
    default_country_iso: Option<String>,
    metrics: Metrics,
}

/// Validation helper functions.
impl CallLookupServiceImpl {
    /// Validate the caller-ID string before dispatching a lookup.
    fn validate_incoming_number(number: &str) -> Result<(), String> {
        if number.trim().is_empty() {
            return Err("Incoming number cannot be empty".to_string());
        }
        if number.len() > 64 {
            return Err("Incoming number too long (max 64 characters)".to_string());
        }
        Ok(())
    }
}

impl CallLookupServiceImpl {
    /// Create a new call lookup service.
    pub fn new(
        matcher: Arc<IncomingCallMatcher>,
        default_country_iso: Option<String>,
        metrics: Metrics,
    ) -> Self {
        Self {
            matcher,
            default_country_iso,
            metrics,
        }
    }

    /// Wire a service from configuration and a lookup provider.
    pub fn from_config(provider: Arc<dyn ContactLookupProvider>, config: &Config) -> Self {
        let metrics = Metrics::new();
        let matcher = IncomingCallMatcher::new(
            provider,
            config.suffix_length,
            config.max_candidates,
        )
        .with_metrics(metrics.clone());

        Self::new(
            Arc::new(matcher),
            config.default_country_iso.clone(),
            metrics,
        )
    }

    /// The metrics collector this service records into.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[async_trait]
impl CallLookupService for CallLookupServiceImpl {
    async fn lookup_incoming_call(
        &self,
        incoming_number: &str,
    ) -> LookupResult<Vec<ContactWithPhoneNumbers>> {
        Self::validate_incoming_number(incoming_number).map_err(LookupError::InvalidRequest)?;

        let timer = LookupTimer::new(self.metrics.clone());
        let matcher = Arc::clone(&self.matcher);
        let number = incoming_number.to_string();
        let iso = self.default_country_iso.clone();

        // The lookup runs detached from the dispatching thread; if the
        // caller stops awaiting (the call already ended), the task finishes
        // on its own and there is nothing to clean up.
        let handle = tokio::spawn(async move {
            matcher
                .find_corresponding_contacts(&number, iso.as_deref())
                .await
        });

        match handle.await {
            Ok(Ok(contacts)) => {
                timer.complete();
                info!(matches = contacts.len(), "incoming-call lookup complete");
                Ok(contacts)
            }
            Ok(Err(err)) => {
                timer.complete_with_error();
                warn!(error = %err, "incoming-call lookup failed");
                Err(err)
            }
            Err(join_err) => {
                timer.complete_with_error();
                warn!(error = %join_err, "incoming-call lookup task did not finish");
                Err(LookupError::TaskFailed(join_err.to_string()))
            }
        }
    }
}
