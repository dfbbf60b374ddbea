use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Three-level severity used by every per-record classifier.
///
/// Variants are ordered by severity, so `max` picks the worse of two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gait label stamped on a daily record. `NoData` only appears in summaries
/// built from an empty history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GaitAbnormality {
    Normal,
    Abnormal,
    #[serde(rename = "No Data")]
    NoData,
}

impl fmt::Display for GaitAbnormality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GaitAbnormality::Normal => "Normal",
            GaitAbnormality::Abnormal => "Abnormal",
            GaitAbnormality::NoData => "No Data",
        })
    }
}

/// Risk label for multi-day summaries, where an empty history has no level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ClinicalRisk {
    Low,
    Moderate,
    High,
    #[serde(rename = "No Data")]
    NoData,
}

impl From<RiskLevel> for ClinicalRisk {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => ClinicalRisk::Low,
            RiskLevel::Moderate => ClinicalRisk::Moderate,
            RiskLevel::High => ClinicalRisk::High,
        }
    }
}

impl fmt::Display for ClinicalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClinicalRisk::Low => "Low",
            ClinicalRisk::Moderate => "Moderate",
            ClinicalRisk::High => "High",
            ClinicalRisk::NoData => "No Data",
        })
    }
}

/// Output of one scoring pass over a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub gait_score: f64,
    pub pressure_risk: RiskLevel,
    pub skin_risk: RiskLevel,
    pub overall_risk_level: RiskLevel,
    pub flags: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A scored record together with timing metadata, returned to the caller
/// for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordAnalysis {
    pub record_id: Uuid,
    pub subject_id: Uuid,
    pub score: ScoreResult,
    pub execution_time_ms: f64,
    pub created_at: jiff::Timestamp,
}
