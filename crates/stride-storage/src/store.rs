//! Collaborator traits for the external stores.
//!
//! Methods return boxed futures so the traits stay object-safe and can be
//! shared as `Arc<dyn ...>` between request handlers.

use futures::future::BoxFuture;
use uuid::Uuid;

use stride_core::models::analysis::{AnalysisKey, CachedAnalysis};
use stride_core::models::metric::DailyRecord;
use stride_core::models::profile::SubjectProfile;

use crate::error::StorageError;

/// Which daily records a [`MetricSource`] should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordQuery {
    pub limit: usize,
    /// Skip records with non-positive walking speed.
    pub qualifying_only: bool,
}

impl RecordQuery {
    pub fn latest(limit: usize) -> Self {
        Self {
            limit,
            qualifying_only: false,
        }
    }

    pub fn qualifying(limit: usize) -> Self {
        Self {
            limit,
            qualifying_only: true,
        }
    }

    /// Apply the query to records in any order, returning newest first.
    pub fn apply(&self, mut records: Vec<DailyRecord>) -> Vec<DailyRecord> {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
            .into_iter()
            .filter(|r| !self.qualifying_only || r.metrics.is_qualifying())
            .take(self.limit)
            .collect()
    }
}

pub trait ProfileSource: Send + Sync {
    fn profile(
        &self,
        subject_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<SubjectProfile>, StorageError>>;
}

pub trait MetricSource: Send + Sync {
    fn record(
        &self,
        subject_id: Uuid,
        record_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<DailyRecord>, StorageError>>;

    /// Records matching `query`, newest first.
    fn recent_records(
        &self,
        subject_id: Uuid,
        query: RecordQuery,
    ) -> BoxFuture<'_, Result<Vec<DailyRecord>, StorageError>>;

    fn insert(&self, record: DailyRecord) -> BoxFuture<'_, Result<(), StorageError>>;
}

/// Insert-only persistence for composed summaries.
pub trait ReportStore: Send + Sync {
    /// The most recent entry for `key`, regardless of age.
    fn fetch(
        &self,
        key: AnalysisKey,
    ) -> BoxFuture<'_, Result<Option<CachedAnalysis>, StorageError>>;

    /// Insert `entry`. Earlier entries for the same key are kept.
    fn store(&self, entry: CachedAnalysis) -> BoxFuture<'_, Result<(), StorageError>>;
}
