//! S3-backed collaborator stores.
//!
//! Layout follows [`stride_core::keys`]: one JSON object per profile, per
//! daily record, and per cached analysis. Analyses are never overwritten;
//! the newest object under a key's prefix wins.

use aws_sdk_s3::Client;
use futures::future::BoxFuture;
use tracing::{debug, info};
use uuid::Uuid;

use stride_core::keys;
use stride_core::models::analysis::{AnalysisKey, CachedAnalysis};
use stride_core::models::metric::DailyRecord;
use stride_core::models::profile::SubjectProfile;

use crate::error::StorageError;
use crate::json::{load_json, save_json};
use crate::objects;
use crate::store::{MetricSource, ProfileSource, RecordQuery, ReportStore};

#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub async fn save_profile(&self, profile: &SubjectProfile) -> Result<(), StorageError> {
        save_json(&self.client, &self.bucket, &keys::profile(profile.id), profile).await
    }

    pub async fn save_record(&self, record: &DailyRecord) -> Result<(), StorageError> {
        let key = keys::record(record.subject_id, record.id);
        save_json(&self.client, &self.bucket, &key, record).await?;
        info!(subject_id = %record.subject_id, record_id = %record.id, "daily record saved");
        Ok(())
    }
}

impl ProfileSource for S3Store {
    fn profile(
        &self,
        subject_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<SubjectProfile>, StorageError>> {
        Box::pin(async move {
            load_json(&self.client, &self.bucket, &keys::profile(subject_id)).await
        })
    }
}

impl MetricSource for S3Store {
    fn record(
        &self,
        subject_id: Uuid,
        record_id: Uuid,
    ) -> BoxFuture<'_, Result<Option<DailyRecord>, StorageError>> {
        Box::pin(async move {
            load_json(&self.client, &self.bucket, &keys::record(subject_id, record_id)).await
        })
    }

    /// Loads every record under the subject's prefix before ordering, since
    /// object keys carry no timestamp.
    fn recent_records(
        &self,
        subject_id: Uuid,
        query: RecordQuery,
    ) -> BoxFuture<'_, Result<Vec<DailyRecord>, StorageError>> {
        Box::pin(async move {
            let prefix = keys::records_prefix(subject_id);
            let object_keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

            let mut records = Vec::with_capacity(object_keys.len());
            for key in &object_keys {
                let record = load_json::<DailyRecord>(&self.client, &self.bucket, key).await?;
                if let Some(record) = record {
                    records.push(record);
                }
            }
            debug!(subject_id = %subject_id, loaded = records.len(), "daily records loaded");

            Ok(query.apply(records))
        })
    }

    fn insert(&self, record: DailyRecord) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move { self.save_record(&record).await })
    }
}

impl ReportStore for S3Store {
    fn fetch(
        &self,
        key: AnalysisKey,
    ) -> BoxFuture<'_, Result<Option<CachedAnalysis>, StorageError>> {
        Box::pin(async move {
            let prefix = keys::analysis_prefix(&key);
            let object_keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

            let Some(latest) = object_keys.iter().max() else {
                return Ok(None);
            };
            load_json(&self.client, &self.bucket, latest).await
        })
    }

    fn store(&self, entry: CachedAnalysis) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let key = keys::analysis(&entry.key(), entry.created_at);
            save_json(&self.client, &self.bucket, &key, &entry).await
        })
    }
}
