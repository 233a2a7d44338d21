//! Gate between the calculators and the insight provider.
//!
//! Expensive AI judgments are cached on the snapshot they were generated
//! for; the gate decides per metric whether that cache answers the question
//! or a fresh provider call is needed. The gate never writes back -- the
//! sync cycle that creates the next snapshot owns cache population.
//!
//! Two scoring requests racing on the same cold snapshot will both miss and
//! both pay for the provider call. That duplication is accepted: the
//! judgments are idempotent and misses are logged, so the waste is visible.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::insight::{InsightProvider, ProviderError};
use crate::types::{AiInsightCache, Snapshot};

/// Outcome of one gated lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight<T> {
    /// Served from the snapshot's cache.
    Cached(T),
    /// Computed by the provider for this request.
    Fresh(T),
    /// Provider unavailable, errored, or timed out; the calculator applies
    /// its documented default.
    Unavailable,
}

pub struct InsightGate {
    provider: Arc<dyn InsightProvider>,
    timeout: Duration,
}

impl InsightGate {
    #[must_use]
    pub fn new(provider: Arc<dyn InsightProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// The underlying provider, for use inside `compute` closures.
    #[must_use]
    pub fn provider(&self) -> &dyn InsightProvider {
        self.provider.as_ref()
    }

    /// Resolve one metric: cache first, then a capability-checked,
    /// timeout-bounded provider call.
    ///
    /// `cached` extracts the metric's value from a snapshot cache, keyed by
    /// `{snapshot.id, cache.generated_at}` for the hit/miss logs. `compute`
    /// is only invoked on a miss with an available provider; failures and
    /// timeouts degrade to [`Insight::Unavailable`], never to an error.
    pub async fn fetch<T, E, F, Fut>(
        &self,
        metric: &'static str,
        snapshot: Option<&Snapshot>,
        cached: E,
        compute: F,
    ) -> Insight<T>
    where
        E: FnOnce(&AiInsightCache) -> Option<T>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        if let Some(snap) = snapshot {
            if let Some(cache) = &snap.ai {
                if let Some(value) = cached(cache) {
                    tracing::debug!(
                        metric,
                        snapshot_id = %snap.id,
                        generated_at = %cache.generated_at,
                        "insight cache hit"
                    );
                    return Insight::Cached(value);
                }
            }
        }

        if !self.provider.is_available().await {
            tracing::warn!(metric, "insight provider unavailable, applying fallback");
            return Insight::Unavailable;
        }

        tracing::debug!(metric, "insight cache miss, querying provider");
        match tokio::time::timeout(self.timeout, compute()).await {
            Ok(Ok(value)) => Insight::Fresh(value),
            Ok(Err(e)) => {
                tracing::warn!(metric, error = %e, "insight call failed, applying fallback");
                Insight::Unavailable
            }
            Err(_) => {
                tracing::warn!(
                    metric,
                    timeout_secs = self.timeout.as_secs(),
                    "insight call timed out, applying fallback"
                );
                Insight::Unavailable
            }
        }
    }
}
