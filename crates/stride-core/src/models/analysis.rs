use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::summary::SummaryPayload;

/// Discriminates cached summaries of different types for the same subject
/// and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportKind {
    /// Summary enriched by the narrative model.
    AiMedicalReport,
    /// Rule-based summary only.
    ClinicalSummary,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::AiMedicalReport => "ai_medical_report",
            ReportKind::ClinicalSummary => "clinical_summary",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache key for a composed summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisKey {
    pub subject_id: Uuid,
    pub date: jiff::civil::Date,
    pub report_kind: ReportKind,
}

impl AnalysisKey {
    pub fn new(subject_id: Uuid, date: jiff::civil::Date, report_kind: ReportKind) -> Self {
        Self {
            subject_id,
            date,
            report_kind,
        }
    }
}

impl fmt::Display for AnalysisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.subject_id, self.date, self.report_kind)
    }
}

/// A stored summary. Entries are insert-only; a newer entry for the same
/// key supersedes older ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CachedAnalysis {
    pub subject_id: Uuid,
    pub date: jiff::civil::Date,
    pub report_kind: ReportKind,
    pub payload: SummaryPayload,
    pub created_at: jiff::Timestamp,
}

impl CachedAnalysis {
    pub fn new(key: AnalysisKey, payload: SummaryPayload, created_at: jiff::Timestamp) -> Self {
        Self {
            subject_id: key.subject_id,
            date: key.date,
            report_kind: key.report_kind,
            payload,
            created_at,
        }
    }

    pub fn key(&self) -> AnalysisKey {
        AnalysisKey::new(self.subject_id, self.date, self.report_kind)
    }
}
