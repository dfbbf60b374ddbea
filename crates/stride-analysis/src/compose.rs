//! Summary and dashboard assembly. Pure, no I/O.

use stride_core::models::metric::DailyRecord;
use stride_core::models::profile::SubjectProfile;
use stride_core::models::score::{ClinicalRisk, GaitAbnormality, RiskLevel};
use stride_core::models::summary::{
    ClinicalProfile, DashboardSummary, Narrative, RollingAverages, SummaryClassification,
    SummaryPayload,
};

use crate::classify::determine_overall_clinical_risk;
use crate::narrative::clinical_summary_lines;
use crate::scoring::round_to;
use crate::trends::{aggregate_trends, latest_qualifying};

pub const ALERT_LOAD_IMBALANCE: &str = "Load Imbalance Detected";

/// Classification block of a summary.
pub fn classify_summary(
    averages: &RollingAverages,
    profile: &SubjectProfile,
) -> SummaryClassification {
    SummaryClassification {
        gait_abnormality: averages.gait_abnormality,
        skin_risk: averages.skin_risk,
        prosthetic_health_score: round_to(averages.prosthetic_health_score, 2),
        overall_clinical_risk: determine_overall_clinical_risk(averages, profile),
    }
}

/// Rule-based narrative with no collaborator text.
pub fn rule_based_narrative(averages: &RollingAverages) -> Narrative {
    Narrative {
        analysis: clinical_summary_lines(averages),
        ai_insight: None,
    }
}

pub fn clinical_profile(profile: &SubjectProfile) -> ClinicalProfile {
    ClinicalProfile {
        gender: profile.gender.clone(),
        height_cm: profile.height_cm,
        weight_kg: profile.weight_kg,
        bmi: profile.effective_bmi(),
        blood_pressure: profile.blood_pressure(),
        blood_sugar_mg_dl: profile.blood_sugar_mg_dl,
        medical_conditions: profile.medical_conditions.clone(),
    }
}

/// Alerts derived from a summary window.
pub fn summary_alerts(averages: &RollingAverages) -> Vec<String> {
    let mut alerts = Vec::new();
    if !averages.is_empty() && averages.metrics.avg_pressure_distribution_index < 0.6 {
        alerts.push(ALERT_LOAD_IMBALANCE.to_string());
    }
    alerts
}

/// Merge profile, averages, classification, and narrative into one payload.
pub fn compose_summary(
    profile: &SubjectProfile,
    averages: &RollingAverages,
    classification: SummaryClassification,
    narrative: Narrative,
) -> SummaryPayload {
    SummaryPayload {
        metrics: averages.metrics.rounded(),
        classification,
        clinical_profile: clinical_profile(profile),
        analysis: narrative.analysis,
        patient_name: profile.name.clone(),
        patient_age: profile.age,
        recent_alerts: summary_alerts(averages),
        ai_insight: narrative.ai_insight,
    }
}

/// Dashboard view over a subject's records: latest qualifying record, trend
/// series over `window` qualifying records, and alerts for the latest one.
pub fn compose_dashboard(
    profile: &SubjectProfile,
    records: &[DailyRecord],
    window: usize,
) -> DashboardSummary {
    let latest = latest_qualifying(records);

    let mut alerts = Vec::new();
    if let Some(record) = latest {
        if record.gait_abnormality == GaitAbnormality::Abnormal {
            alerts.push("Significant gait abnormality detected.".to_string());
        }
        if record.skin_risk == RiskLevel::High {
            alerts.push("High risk of skin irritation. Check socket fit.".to_string());
        }
        if record.metrics.pressure_distribution_index < 0.6 {
            alerts.push(format!("{ALERT_LOAD_IMBALANCE}."));
        }
    }

    DashboardSummary {
        patient_name: profile.name.clone(),
        latest_health_score: latest.map(|r| r.prosthetic_health_score),
        gait_abnormality: latest.map_or(GaitAbnormality::NoData, |r| r.gait_abnormality),
        skin_risk: latest.map_or(ClinicalRisk::NoData, |r| r.skin_risk.into()),
        trends: aggregate_trends(records, window),
        recent_alerts: alerts,
    }
}
