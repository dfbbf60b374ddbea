//! Request-level operations over the analysis engine.
//!
//! `ReportService` owns no state besides its collaborators and the report
//! cache, so one instance can serve any number of concurrent requests.

use std::sync::Arc;
use std::time::Instant;

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use tracing::{info, warn};
use uuid::Uuid;

use stride_analysis::compose::{
    classify_summary, compose_dashboard, compose_summary, rule_based_narrative,
};
use stride_analysis::ingest::assess_daily_input;
use stride_analysis::normalize::normalize;
use stride_analysis::score_record;
use stride_analysis::trends::{AVERAGE_WINDOW, DEFAULT_TREND_WINDOW, aggregate_averages};
use stride_core::models::analysis::{AnalysisKey, ReportKind};
use stride_core::models::metric::{DailyRecord, RawMetricRecord};
use stride_core::models::profile::SubjectProfile;
use stride_core::models::score::RecordAnalysis;
use stride_core::models::summary::{DashboardSummary, SummaryPayload};
use stride_narrative::narrator::Narrator;
use stride_storage::cache::{Lookup, ReportCache};
use stride_storage::store::{MetricSource, ProfileSource, RecordQuery, ReportStore};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

pub struct ReportService {
    profiles: Arc<dyn ProfileSource>,
    records: Arc<dyn MetricSource>,
    cache: ReportCache,
    narrator: Option<Arc<dyn Narrator>>,
    trend_window: usize,
    average_window: usize,
}

impl ReportService {
    pub fn new(
        profiles: Arc<dyn ProfileSource>,
        records: Arc<dyn MetricSource>,
        reports: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            profiles,
            records,
            cache: ReportCache::new(reports),
            narrator: None,
            trend_window: DEFAULT_TREND_WINDOW,
            average_window: AVERAGE_WINDOW,
        }
    }

    pub fn from_config(
        config: &ServiceConfig,
        profiles: Arc<dyn ProfileSource>,
        records: Arc<dyn MetricSource>,
        reports: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            profiles,
            records,
            cache: ReportCache::with_window(reports, config.freshness_window()),
            narrator: None,
            trend_window: config.trend_window,
            average_window: config.average_window.min(AVERAGE_WINDOW),
        }
    }

    pub fn with_narrator(mut self, narrator: Arc<dyn Narrator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    /// Summaries enriched by a narrator are cached separately from
    /// rule-based ones.
    pub fn report_kind(&self) -> ReportKind {
        if self.narrator.is_some() {
            ReportKind::AiMedicalReport
        } else {
            ReportKind::ClinicalSummary
        }
    }

    async fn profile(&self, subject_id: Uuid) -> Result<SubjectProfile, ServiceError> {
        self.profiles
            .profile(subject_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("profile", subject_id))
    }

    /// Today's summary for `subject_id`, served from the cache while fresh.
    pub async fn summary(&self, subject_id: Uuid) -> Result<Lookup, ServiceError> {
        let today = Timestamp::now().to_zoned(TimeZone::UTC).date();
        self.summary_on(subject_id, today).await
    }

    /// The summary cached under `date`. A miss composes from the records
    /// available now.
    pub async fn summary_on(&self, subject_id: Uuid, date: Date) -> Result<Lookup, ServiceError> {
        let profile = self.profile(subject_id).await?;
        let key = AnalysisKey::new(subject_id, date, self.report_kind());

        let lookup = self
            .cache
            .get_or_compose(key, || self.build_summary(&profile))
            .await?;

        info!(
            subject_id = %subject_id,
            report_kind = %key.report_kind,
            cached = lookup.is_hit(),
            "summary ready"
        );
        Ok(lookup)
    }

    /// Compose a fresh summary without consulting the cache.
    pub async fn build_summary(
        &self,
        profile: &SubjectProfile,
    ) -> Result<SummaryPayload, ServiceError> {
        let records = self
            .records
            .recent_records(profile.id, RecordQuery::latest(self.average_window))
            .await?;

        let averages = aggregate_averages(&records);
        let classification = classify_summary(&averages, profile);
        let mut payload = compose_summary(
            profile,
            &averages,
            classification,
            rule_based_narrative(&averages),
        );

        if let Some(narrator) = &self.narrator {
            match narrator.narrate(&payload).await {
                Ok(insight) => payload.ai_insight = Some(insight),
                Err(e) => warn!(
                    subject_id = %profile.id,
                    model = narrator.model_id(),
                    error = %e,
                    "narrative unavailable, using rule-based summary"
                ),
            }
        }

        Ok(payload)
    }

    /// Score one stored record.
    pub async fn analyze_record(
        &self,
        subject_id: Uuid,
        record_id: Uuid,
    ) -> Result<RecordAnalysis, ServiceError> {
        let started = Instant::now();

        let profile = self.profile(subject_id).await?;
        let record = self
            .records
            .record(subject_id, record_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("record", record_id))?;

        let score = score_record(&record.metrics, &profile);
        let execution_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        info!(
            subject_id = %subject_id,
            record_id = %record_id,
            overall_risk = %score.overall_risk_level,
            execution_time_ms,
            "record analyzed"
        );

        Ok(RecordAnalysis {
            record_id,
            subject_id,
            score,
            execution_time_ms,
            created_at: Timestamp::now(),
        })
    }

    pub async fn dashboard(&self, subject_id: Uuid) -> Result<DashboardSummary, ServiceError> {
        let profile = self.profile(subject_id).await?;
        // Sentinel records never reach the trend series, so skip them at the source.
        let records = self
            .records
            .recent_records(subject_id, RecordQuery::qualifying(self.trend_window))
            .await?;

        Ok(compose_dashboard(&profile, &records, self.trend_window))
    }

    /// Normalize, validate, assess, and store a daily reading.
    pub async fn ingest(
        &self,
        subject_id: Uuid,
        raw: &RawMetricRecord,
    ) -> Result<DailyRecord, ServiceError> {
        let profile = self.profile(subject_id).await?;
        let record = assess_daily_input(subject_id, normalize(raw), &profile, Timestamp::now())?;
        self.records.insert(record.clone()).await?;

        info!(
            subject_id = %subject_id,
            record_id = %record.id,
            gait_abnormality = %record.gait_abnormality,
            health_score = record.prosthetic_health_score,
            "daily record ingested"
        );
        Ok(record)
    }
}
