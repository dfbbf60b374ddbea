//! stride-analysis
//!
//! Deterministic biomechanical scoring, risk classification, trend
//! aggregation, and summary composition. Pure functions over
//! `stride-core` types with no I/O.

pub mod classify;
pub mod compose;
pub mod ingest;
pub mod narrative;
pub mod normalize;
pub mod recommend;
pub mod scoring;
pub mod trends;

use stride_core::models::metric::MetricRecord;
use stride_core::models::profile::SubjectProfile;
use stride_core::models::score::ScoreResult;

/// Score one record: gait score, pressure and skin risk, overall level,
/// flags, and recommendations.
pub fn score_record(record: &MetricRecord, profile: &SubjectProfile) -> ScoreResult {
    let gait_score = scoring::gait_score(record);
    let pressure_risk = scoring::pressure_risk(record);
    let skin_risk = scoring::skin_risk(record);

    ScoreResult {
        gait_score,
        pressure_risk,
        skin_risk,
        overall_risk_level: classify::overall_risk_level(gait_score, pressure_risk, skin_risk),
        flags: recommend::flags(gait_score, pressure_risk, skin_risk),
        recommendations: recommend::recommendations(gait_score, pressure_risk, skin_risk, profile),
    }
}
