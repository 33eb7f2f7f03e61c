//! Quote state container: last-known-good snapshot plus poll bookkeeping.

use super::QuoteSnapshot;
use crate::error::FeedError;
use std::sync::Arc;

/// Holds the most recent successful quote.
///
/// A successful poll replaces the snapshot wholesale. A failed poll leaves it
/// untouched; the failure is recorded but never shown in place of the price.
#[derive(Debug, Clone, Default)]
pub struct QuoteState {
    snapshot: Option<Arc<QuoteSnapshot>>,
    last_failure: Option<FeedError>,
    consecutive_failures: u32,
    revision: u64,
}

impl QuoteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a poll result. Returns `true` if the snapshot was replaced.
    pub fn apply(&mut self, result: Result<QuoteSnapshot, FeedError>) -> bool {
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(Arc::new(snapshot));
                self.last_failure = None;
                self.consecutive_failures = 0;
                self.revision += 1;
                true
            }
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                tracing::warn!(
                    failures = self.consecutive_failures,
                    stale = self.snapshot.is_some(),
                    "Quote poll failed, keeping last snapshot: {}",
                    e
                );
                self.last_failure = Some(e);
                false
            }
        }
    }

    /// Shared read-only view of the current snapshot.
    pub fn snapshot(&self) -> Option<Arc<QuoteSnapshot>> {
        self.snapshot.clone()
    }

    pub fn price(&self) -> Option<f64> {
        self.snapshot.as_ref().map(|s| s.price)
    }

    pub fn last_failure(&self) -> Option<&FeedError> {
        self.last_failure.as_ref()
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Bumped on every successful replacement.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True while the snapshot predates the most recent failed poll.
    pub fn is_stale(&self) -> bool {
        self.snapshot.is_some() && self.last_failure.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
