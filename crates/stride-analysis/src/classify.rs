//! Risk classification.
//!
//! Two independent notions of "overall risk" live here and are allowed to
//! disagree:
//!
//! - [`overall_risk_level`] classifies one scored record.
//! - [`determine_overall_clinical_risk`] classifies a multi-day window of
//!   averaged metrics in the context of the subject's profile.

use stride_core::models::profile::SubjectProfile;
use stride_core::models::score::{ClinicalRisk, RiskLevel};
use stride_core::models::summary::RollingAverages;

use crate::narrative::scaled_symmetry;

/// Severity-first: any High signal forces High, then any Moderate signal
/// forces Moderate.
pub fn overall_risk_level(
    gait_score: f64,
    pressure_risk: RiskLevel,
    skin_risk: RiskLevel,
) -> RiskLevel {
    if skin_risk == RiskLevel::High || pressure_risk == RiskLevel::High || gait_score < 50.0 {
        return RiskLevel::High;
    }
    if skin_risk == RiskLevel::Moderate
        || pressure_risk == RiskLevel::Moderate
        || gait_score < 80.0
    {
        return RiskLevel::Moderate;
    }
    RiskLevel::Low
}

/// Points accumulated by [`determine_overall_clinical_risk`].
pub fn clinical_risk_points(averages: &RollingAverages, profile: &SubjectProfile) -> u32 {
    let m = &averages.metrics;
    let mut points = 0;

    let symmetry = scaled_symmetry(m.avg_gait_symmetry_index);
    if symmetry < 75.0 {
        points += 2;
    } else if symmetry < 90.0 {
        points += 1;
    }

    if m.avg_pressure_distribution_index < 0.6 {
        points += 2;
    } else if m.avg_pressure_distribution_index < 0.8 {
        points += 1;
    }

    if m.avg_skin_temperature_c > 34.0 {
        points += 1;
    }
    if m.avg_skin_moisture > 70.0 {
        points += 1;
    }

    if profile.effective_bmi().is_some_and(|bmi| bmi > 30.0) {
        points += 1;
    }

    let hypertensive = profile.blood_pressure_systolic.is_some_and(|s| s >= 140)
        || profile.blood_pressure_diastolic.is_some_and(|d| d >= 90);
    if hypertensive {
        points += 1;
    }

    match profile.blood_sugar_mg_dl {
        Some(sugar) if sugar >= 200 => points += 2,
        Some(sugar) if sugar >= 126 => points += 1,
        _ => {}
    }

    points
}

/// Profile-aware risk label for a multi-day summary. An empty window has no
/// level.
pub fn determine_overall_clinical_risk(
    averages: &RollingAverages,
    profile: &SubjectProfile,
) -> ClinicalRisk {
    if averages.is_empty() {
        return ClinicalRisk::NoData;
    }
    match clinical_risk_points(averages, profile) {
        p if p >= 5 => ClinicalRisk::High,
        p if p >= 2 => ClinicalRisk::Moderate,
        _ => ClinicalRisk::Low,
    }
}
