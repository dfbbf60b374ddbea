use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::score::{ClinicalRisk, GaitAbnormality};
use super::trend::TrendSeries;

/// Phrases a narrative collaborator emits in place of real text when it
/// fails. A summary carrying one of them must be regenerated.
pub const PLACEHOLDER_MARKERS: &[&str] = &["temporarily unavailable", "failed to generate"];

/// Whether `text` contains a known placeholder-failure marker.
pub fn is_placeholder_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    PLACEHOLDER_MARKERS.iter().any(|m| lower.contains(m))
}

/// Per-metric means over a window of daily records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AverageMetrics {
    pub avg_step_length_cm: f64,
    pub avg_cadence_spm: f64,
    pub avg_walking_speed_mps: f64,
    pub avg_gait_symmetry_index: f64,
    pub avg_pressure_distribution_index: f64,
    pub avg_skin_temperature_c: f64,
    pub avg_skin_moisture: f64,
}

impl AverageMetrics {
    fn values(&self) -> [f64; 7] {
        [
            self.avg_step_length_cm,
            self.avg_cadence_spm,
            self.avg_walking_speed_mps,
            self.avg_gait_symmetry_index,
            self.avg_pressure_distribution_index,
            self.avg_skin_temperature_c,
            self.avg_skin_moisture,
        ]
    }

    pub fn all_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }

    /// Copy with every mean rounded to two decimals.
    pub fn rounded(&self) -> Self {
        let r = |v: f64| (v * 100.0).round() / 100.0;
        Self {
            avg_step_length_cm: r(self.avg_step_length_cm),
            avg_cadence_spm: r(self.avg_cadence_spm),
            avg_walking_speed_mps: r(self.avg_walking_speed_mps),
            avg_gait_symmetry_index: r(self.avg_gait_symmetry_index),
            avg_pressure_distribution_index: r(self.avg_pressure_distribution_index),
            avg_skin_temperature_c: r(self.avg_skin_temperature_c),
            avg_skin_moisture: r(self.avg_skin_moisture),
        }
    }
}

/// Unrounded aggregate of a record window, the input to summary
/// classification and composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RollingAverages {
    pub record_count: usize,
    pub metrics: AverageMetrics,
    pub prosthetic_health_score: f64,
    /// Label of the most recent record in the window.
    pub gait_abnormality: GaitAbnormality,
    /// Label of the most recent record in the window.
    pub skin_risk: ClinicalRisk,
}

impl RollingAverages {
    pub fn empty() -> Self {
        Self {
            record_count: 0,
            metrics: AverageMetrics::default(),
            prosthetic_health_score: 0.0,
            gait_abnormality: GaitAbnormality::NoData,
            skin_risk: ClinicalRisk::NoData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryClassification {
    pub gait_abnormality: GaitAbnormality,
    pub skin_risk: ClinicalRisk,
    pub prosthetic_health_score: f64,
    pub overall_clinical_risk: ClinicalRisk,
}

/// Profile snapshot as shown on a report. Display substitution for absent
/// values is the renderer's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalProfile {
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    pub blood_pressure: Option<String>,
    pub blood_sugar_mg_dl: Option<u32>,
    pub medical_conditions: Vec<String>,
}

/// Narrative text attached to a summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Narrative {
    /// Rule-based lines, always present.
    pub analysis: Vec<String>,
    /// Free text from the optional narrative collaborator.
    pub ai_insight: Option<String>,
}

/// The multi-day clinical summary handed to the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryPayload {
    pub metrics: AverageMetrics,
    pub classification: SummaryClassification,
    pub clinical_profile: ClinicalProfile,
    pub analysis: Vec<String>,
    pub patient_name: String,
    pub patient_age: u32,
    pub recent_alerts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

impl SummaryPayload {
    pub fn has_real_metrics(&self) -> bool {
        self.metrics.all_finite() && self.classification.prosthetic_health_score.is_finite()
    }

    /// Whether any narrative text is a placeholder left by a failed
    /// collaborator call.
    pub fn has_placeholder_narrative(&self) -> bool {
        self.analysis.iter().any(|line| is_placeholder_text(line))
            || self.ai_insight.as_deref().is_some_and(is_placeholder_text)
    }
}

/// Dashboard view: latest record labels, chart series, and alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub patient_name: String,
    pub latest_health_score: Option<f64>,
    pub gait_abnormality: GaitAbnormality,
    pub skin_risk: ClinicalRisk,
    pub trends: TrendSeries,
    pub recent_alerts: Vec<String>,
}
