//! Assessment stamped onto a daily record when it is ingested.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use stride_core::error::ValidationError;
use stride_core::models::metric::{DailyRecord, MetricRecord};
use stride_core::models::profile::SubjectProfile;
use stride_core::models::score::{GaitAbnormality, RiskLevel};
use uuid::Uuid;

use crate::scoring::{gait_score, pressure_risk, round_to, skin_risk};

/// Gait scores below this mark a record as abnormal.
pub const ABNORMAL_GAIT_THRESHOLD: f64 = 75.0;

pub fn gait_abnormality(record: &MetricRecord) -> GaitAbnormality {
    if gait_score(record) < ABNORMAL_GAIT_THRESHOLD {
        GaitAbnormality::Abnormal
    } else {
        GaitAbnormality::Normal
    }
}

/// Composite device health score in `[0, 100]`: the gait score less
/// penalties for pressure and skin risk and for a BMI above 30.
pub fn prosthetic_health_score(record: &MetricRecord, profile: &SubjectProfile) -> f64 {
    let mut score = gait_score(record);

    score -= match pressure_risk(record) {
        RiskLevel::High => 15.0,
        RiskLevel::Moderate => 7.5,
        RiskLevel::Low => 0.0,
    };
    score -= match skin_risk(record) {
        RiskLevel::High => 10.0,
        RiskLevel::Moderate => 5.0,
        RiskLevel::Low => 0.0,
    };
    if profile.effective_bmi().is_some_and(|bmi| bmi > 30.0) {
        score -= 5.0;
    }

    round_to(score.clamp(0.0, 100.0), 2)
}

/// Validate a daily reading and stamp it with its per-record assessment.
///
/// The record date is the UTC calendar day of `now`.
pub fn assess_daily_input(
    subject_id: Uuid,
    metrics: MetricRecord,
    profile: &SubjectProfile,
    now: Timestamp,
) -> Result<DailyRecord, ValidationError> {
    metrics.validate()?;

    Ok(DailyRecord {
        id: Uuid::new_v4(),
        subject_id,
        date: now.to_zoned(TimeZone::UTC).date(),
        metrics,
        gait_abnormality: gait_abnormality(&metrics),
        skin_risk: skin_risk(&metrics),
        prosthetic_health_score: prosthetic_health_score(&metrics, profile),
        created_at: now,
    })
}
