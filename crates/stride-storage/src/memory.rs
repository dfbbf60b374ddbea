use std::collections::HashMap;

use futures::future::BoxFuture;
use tokio::sync::RwLock;
use uuid::Uuid;

use stride_core::models::analysis::{AnalysisKey, CachedAnalysis};
use stride_core::models::metric::DailyRecord;
use stride_core::models::profile::SubjectProfile;

use crate::error::StorageError;
use crate::store::{MetricSource, ProfileSource, RecordQuery, ReportStore};

/// Process-local store implementing every collaborator trait.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<Uuid, SubjectProfile>>,
    records: RwLock<HashMap<Uuid, Vec<DailyRecord>>>,
    analyses: RwLock<HashMap<AnalysisKey, Vec<CachedAnalysis>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn save_profile(&self, profile: SubjectProfile) {
        self.profiles.write().await.insert(profile.id, profile);
    }

    pub async fn save_record(&self, record: DailyRecord) {
        self.records
            .write()
            .await
            .entry(record.subject_id)
            .or_default()
            .push(record);
    }

    /// Number of analyses ever inserted for `key`, stale ones included.
    pub async fn analysis_count(&self, key: AnalysisKey) -> usize {
        self.analyses.read().await.get(&key).map_or(0, Vec::len)
    }
}

impl ProfileSource for MemoryStore {
    fn profile(
        &self,
        subject_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<SubjectProfile>, StorageError>> {
        Box::pin(async move { Ok(self.profiles.read().await.get(&subject_id).cloned()) })
    }
}

impl MetricSource for MemoryStore {
    fn record(
        &self,
        subject_id: Uuid,
        record_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<DailyRecord>, StorageError>> {
        Box::pin(async move {
            let records = self.records.read().await;
            Ok(records
                .get(&subject_id)
                .and_then(|rs| rs.iter().find(|r| r.id == record_id))
                .cloned())
        })
    }

    fn recent_records(
        &self,
        subject_id: Uuid,
        query: RecordQuery,
    ) -> BoxFuture<'_, Result<Vec<DailyRecord>, StorageError>> {
        Box::pin(async move {
            let records = self
                .records
                .read()
                .await
                .get(&subject_id)
                .cloned()
                .unwrap_or_default();
            Ok(query.apply(records))
        })
    }

    fn insert(&self, record: DailyRecord) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.save_record(record).await;
            Ok(())
        })
    }
}

impl ReportStore for MemoryStore {
    fn fetch(
        &self,
        key: AnalysisKey,
    ) -> BoxFuture<'_, Result<Option<CachedAnalysis>, StorageError>> {
        Box::pin(async move {
            let analyses = self.analyses.read().await;
            // max_by_key keeps the last maximum, so ties go to the later insert.
            Ok(analyses
                .get(&key)
                .and_then(|entries| entries.iter().max_by_key(|e| e.created_at).cloned()))
        })
    }

    fn store(&self, entry: CachedAnalysis) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            self.analyses
                .write()
                .await
                .entry(entry.key())
                .or_default()
                .push(entry);
            Ok(())
        })
    }
}
