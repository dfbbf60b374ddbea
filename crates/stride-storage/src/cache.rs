//! Freshness-windowed cache over a [`ReportStore`].
//!
//! An entry is reused only while it is younger than the freshness window,
//! carries finite metrics, and holds no placeholder narrative. An AI report
//! saved without its insight is also stale, so the next read retries the
//! narrator.
//!
//! Concurrent misses on one key are collapsed: the first caller composes and
//! stores, the rest wait on a per-key lock and then read its entry.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use jiff::{SignedDuration, Timestamp};
use tracing::{debug, warn};

use stride_core::models::analysis::{AnalysisKey, CachedAnalysis, ReportKind};
use stride_core::models::summary::SummaryPayload;

use crate::error::StorageError;
use crate::store::ReportStore;

pub const DEFAULT_FRESHNESS_HOURS: i64 = 24;

/// Why a stored entry is or is not reusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Expired,
    MissingMetrics,
    PlaceholderNarrative,
    MissingNarrative,
}

impl Freshness {
    pub fn is_fresh(self) -> bool {
        self == Freshness::Fresh
    }
}

/// Classify `entry` as seen at `now`.
pub fn freshness(entry: &CachedAnalysis, now: Timestamp, window: SignedDuration) -> Freshness {
    if now.duration_since(entry.created_at) >= window {
        Freshness::Expired
    } else if !entry.payload.has_real_metrics() {
        Freshness::MissingMetrics
    } else if entry.payload.has_placeholder_narrative() {
        Freshness::PlaceholderNarrative
    } else if entry.report_kind == ReportKind::AiMedicalReport
        && entry.payload.ai_insight.is_none()
    {
        Freshness::MissingNarrative
    } else {
        Freshness::Fresh
    }
}

/// Outcome of [`ReportCache::get_or_compose`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Hit(CachedAnalysis),
    Computed(CachedAnalysis),
}

impl Lookup {
    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }

    pub fn into_entry(self) -> CachedAnalysis {
        match self {
            Lookup::Hit(entry) | Lookup::Computed(entry) => entry,
        }
    }
}

type InFlight = Mutex<HashMap<AnalysisKey, Arc<tokio::sync::Mutex<()>>>>;

pub struct ReportCache {
    store: Arc<dyn ReportStore>,
    freshness_window: SignedDuration,
    in_flight: InFlight,
}

impl ReportCache {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self::with_window(store, SignedDuration::from_hours(DEFAULT_FRESHNESS_HOURS))
    }

    pub fn with_window(store: Arc<dyn ReportStore>, freshness_window: SignedDuration) -> Self {
        Self {
            store,
            freshness_window,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn freshness_window(&self) -> SignedDuration {
        self.freshness_window
    }

    /// The fresh entry for `key`, if any.
    pub async fn fetch(&self, key: AnalysisKey) -> Result<Option<CachedAnalysis>, StorageError> {
        self.fetch_at(key, Timestamp::now()).await
    }

    /// Like [`fetch`](Self::fetch) with an explicit clock.
    ///
    /// An entry that no longer deserializes is treated as a miss.
    pub async fn fetch_at(
        &self,
        key: AnalysisKey,
        now: Timestamp,
    ) -> Result<Option<CachedAnalysis>, StorageError> {
        let entry = match self.store.fetch(key).await {
            Ok(entry) => entry,
            Err(StorageError::Serialization(e)) => {
                warn!(key = %key, error = %e, "cached analysis unreadable, treating as miss");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let Some(entry) = entry else {
            debug!(key = %key, "analysis cache miss");
            return Ok(None);
        };

        match freshness(&entry, now, self.freshness_window) {
            Freshness::Fresh => {
                debug!(key = %key, created_at = %entry.created_at, "analysis cache hit");
                Ok(Some(entry))
            }
            stale => {
                debug!(key = %key, reason = ?stale, "cached analysis is stale");
                Ok(None)
            }
        }
    }

    /// Insert a new entry for `key` stamped with the current time.
    pub async fn store(
        &self,
        key: AnalysisKey,
        payload: SummaryPayload,
    ) -> Result<CachedAnalysis, StorageError> {
        let entry = CachedAnalysis::new(key, payload, Timestamp::now());
        self.store.store(entry.clone()).await?;
        Ok(entry)
    }

    /// Return the fresh entry for `key`, or run `compose` and store its
    /// result. At most one `compose` runs per key at a time; callers that
    /// waited behind it reuse what it stored.
    pub async fn get_or_compose<F, Fut, E>(
        &self,
        key: AnalysisKey,
        compose: F,
    ) -> Result<Lookup, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SummaryPayload, E>>,
        E: From<StorageError>,
    {
        if let Some(entry) = self.fetch(key).await? {
            return Ok(Lookup::Hit(entry));
        }

        let gate = self.gate(key);
        let result = {
            let _guard = gate.lock().await;
            match self.fetch(key).await {
                Ok(Some(entry)) => Ok(Lookup::Hit(entry)),
                Ok(None) => match compose().await {
                    Ok(payload) => self
                        .store(key, payload)
                        .await
                        .map(Lookup::Computed)
                        .map_err(E::from),
                    Err(e) => Err(e),
                },
                Err(e) => Err(E::from(e)),
            }
        };
        self.release(key, gate);
        result
    }

    fn gate(&self, key: AnalysisKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        in_flight.entry(key).or_default().clone()
    }

    /// Drop the per-key lock once no other caller holds it.
    fn release(&self, key: AnalysisKey, gate: Arc<tokio::sync::Mutex<()>>) {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // One reference in the map, one held here.
        if Arc::strong_count(&gate) == 2 {
            in_flight.remove(&key);
        }
    }
}
