//! Basic metrics instrumentation for call lookups.
//!
//! Provides counters and duration tracking for incoming-call lookup
//! operations. Counters are process-local and lock-free.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for incoming-call lookup performance.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of lookup operations started
    lookups_total: Arc<AtomicU64>,

    /// Total number of lookups that ended in a provider or task failure
    lookup_errors_total: Arc<AtomicU64>,

    /// Total duration of all lookups in milliseconds
    lookup_duration_total_ms: Arc<AtomicU64>,

    /// Number of candidates the suffix pre-filter produced
    candidates_fetched_total: Arc<AtomicU64>,

    /// Number of contacts that survived the precise filter
    matches_returned_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            lookups_total: Arc::new(AtomicU64::new(0)),
            lookup_errors_total: Arc::new(AtomicU64::new(0)),
            lookup_duration_total_ms: Arc::new(AtomicU64::new(0)),
            candidates_fetched_total: Arc::new(AtomicU64::new(0)),
            matches_returned_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a completed lookup with its duration.
    pub fn record_lookup(&self, duration: Duration) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        self.lookup_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed lookup.
    pub fn record_lookup_error(&self) {
        self.lookup_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record candidates produced by the suffix pre-filter.
    pub fn record_candidates_fetched(&self, count: usize) {
        self.candidates_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record contacts returned to the caller.
    pub fn record_matches_returned(&self, count: usize) {
        self.matches_returned_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Get total lookups.
    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    /// Get total lookup errors.
    pub fn lookup_errors_total(&self) -> u64 {
        self.lookup_errors_total.load(Ordering::Relaxed)
    }

    /// Get total lookup duration in milliseconds.
    pub fn lookup_duration_total_ms(&self) -> u64 {
        self.lookup_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average lookup duration in milliseconds.
    pub fn lookup_duration_avg_ms(&self) -> f64 {
        let total = self.lookup_duration_total_ms.load(Ordering::Relaxed);
        let count = self.lookups_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total candidates fetched.
    pub fn candidates_fetched_total(&self) -> u64 {
        self.candidates_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total matches returned.
    pub fn matches_returned_total(&self) -> u64 {
        self.matches_returned_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.lookups_total.store(0, Ordering::Relaxed);
        self.lookup_errors_total.store(0, Ordering::Relaxed);
        self.lookup_duration_total_ms.store(0, Ordering::Relaxed);
        self.candidates_fetched_total.store(0, Ordering::Relaxed);
        self.matches_returned_total.store(0, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            lookups_total: self.lookups_total(),
            lookup_errors_total: self.lookup_errors_total(),
            lookup_duration_total_ms: self.lookup_duration_total_ms(),
            lookup_duration_avg_ms: self.lookup_duration_avg_ms(),
            candidates_fetched_total: self.candidates_fetched_total(),
            matches_returned_total: self.matches_returned_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub lookups_total: u64,
    pub lookup_errors_total: u64,
    pub lookup_duration_total_ms: u64,
    pub lookup_duration_avg_ms: f64,
    pub candidates_fetched_total: u64,
    pub matches_returned_total: u64,
}

/// Helper for timing a single lookup.
pub struct LookupTimer {
    start: Instant,
    metrics: Metrics,
}

impl LookupTimer {
    /// Start timing a lookup.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_lookup(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_lookup(duration);
        self.metrics.record_lookup_error();
    }
}
