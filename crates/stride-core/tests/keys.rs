use jiff::Timestamp;
use stride_core::keys;
use stride_core::models::analysis::{AnalysisKey, ReportKind};
use uuid::Uuid;

#[test]
fn analysis_keys_sort_by_creation_time() {
    let key = AnalysisKey::new(
        Uuid::new_v4(),
        jiff::civil::date(2026, 5, 2),
        ReportKind::AiMedicalReport,
    );
    let early: Timestamp = "2026-05-02T01:00:00Z".parse().unwrap();
    let late: Timestamp = "2026-05-02T23:00:00Z".parse().unwrap();

    let a = keys::analysis(&key, early);
    let b = keys::analysis(&key, late);
    assert!(a < b);
    assert!(a.starts_with(&keys::analysis_prefix(&key)));
    assert!(a.ends_with(".json"));
}

#[test]
fn analysis_keys_in_the_same_millisecond_differ() {
    let key = AnalysisKey::new(
        Uuid::new_v4(),
        jiff::civil::date(2026, 5, 2),
        ReportKind::ClinicalSummary,
    );
    let earlier: Timestamp = "2026-05-02T12:00:00.000Z".parse().unwrap();
    let at: Timestamp = "2026-05-02T12:00:00.001Z".parse().unwrap();

    let first = keys::analysis(&key, at);
    let second = keys::analysis(&key, at);
    assert_ne!(first, second);

    let prefix = format!("{}{:020}-", keys::analysis_prefix(&key), at.as_millisecond());
    assert!(first.starts_with(&prefix));
    assert!(second.starts_with(&prefix));

    let before = keys::analysis(&key, earlier);
    assert!(before < first);
    assert!(before < second);
}

#[test]
fn analysis_prefix_separates_report_kinds() {
    let subject = Uuid::new_v4();
    let date = jiff::civil::date(2026, 5, 2);
    let ai = AnalysisKey::new(subject, date, ReportKind::AiMedicalReport);
    let rule = AnalysisKey::new(subject, date, ReportKind::ClinicalSummary);

    assert_eq!(
        keys::analysis_prefix(&ai),
        format!("analyses/{subject}/2026-05-02/ai_medical_report/")
    );
    assert_ne!(keys::analysis_prefix(&ai), keys::analysis_prefix(&rule));
}

#[test]
fn record_keys_live_under_subject_prefix() {
    let subject = Uuid::new_v4();
    let record = Uuid::new_v4();
    assert!(keys::record(subject, record).starts_with(&keys::records_prefix(subject)));
    assert_eq!(keys::profile(subject), format!("profiles/{subject}.json"));
}
