//! Object key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the Stride bucket.

use uuid::Uuid;

use crate::models::analysis::AnalysisKey;

pub const PROFILES_PREFIX: &str = "profiles/";

pub fn profile(subject_id: Uuid) -> String {
    format!("{PROFILES_PREFIX}{subject_id}.json")
}

pub fn records_prefix(subject_id: Uuid) -> String {
    format!("records/{subject_id}/")
}

pub fn record(subject_id: Uuid, record_id: Uuid) -> String {
    format!("records/{subject_id}/{record_id}.json")
}

pub fn analysis_prefix(key: &AnalysisKey) -> String {
    format!(
        "analyses/{}/{}/{}/",
        key.subject_id, key.date, key.report_kind
    )
}

/// Analysis objects are named by creation time in zero-padded milliseconds,
/// so the lexicographically greatest key under a prefix is the newest entry.
/// A random suffix keeps two entries stored in the same millisecond apart.
pub fn analysis(key: &AnalysisKey, created_at: jiff::Timestamp) -> String {
    format!(
        "{}{:020}-{}.json",
        analysis_prefix(key),
        created_at.as_millisecond(),
        Uuid::new_v4()
    )
}
