use stride_core::models::score::{ClinicalRisk, GaitAbnormality};
use stride_core::models::summary::{
    AverageMetrics, ClinicalProfile, SummaryClassification, SummaryPayload,
};
use stride_narrative::bedrock::BedrockNarrator;
use stride_narrative::error::NarrativeError;
use stride_narrative::narrator::accept_reply;
use stride_narrative::prompt::build_summary_prompt;

fn summary() -> SummaryPayload {
    SummaryPayload {
        metrics: AverageMetrics {
            avg_step_length_cm: 58.25,
            avg_cadence_spm: 88.0,
            avg_walking_speed_mps: 0.9,
            avg_gait_symmetry_index: 0.81,
            avg_pressure_distribution_index: 0.55,
            avg_skin_temperature_c: 34.5,
            avg_skin_moisture: 72.0,
        },
        classification: SummaryClassification {
            gait_abnormality: GaitAbnormality::Abnormal,
            skin_risk: ClinicalRisk::High,
            prosthetic_health_score: 61.5,
            overall_clinical_risk: ClinicalRisk::High,
        },
        clinical_profile: ClinicalProfile {
            gender: Some("Female".to_string()),
            bmi: Some(31.2),
            blood_pressure: Some("142/91".to_string()),
            medical_conditions: vec!["Peripheral artery disease".to_string()],
            ..Default::default()
        },
        analysis: vec!["Average step length is 58.3 cm.".to_string()],
        patient_name: "Maria Santos".to_string(),
        patient_age: 63,
        recent_alerts: vec!["Load Imbalance Detected".to_string()],
        ai_insight: None,
    }
}

#[test]
fn prompt_is_a_single_tagged_block() {
    let prompt = build_summary_prompt(&summary());
    assert!(prompt.starts_with("<patient_summary>"));
    assert!(prompt.ends_with("</patient_summary>"));
    assert!(prompt.contains("<averages>"));
    assert!(prompt.contains("<classification>"));
}

#[test]
fn prompt_carries_labels_and_alerts() {
    let prompt = build_summary_prompt(&summary());
    assert!(prompt.contains("gait_abnormality: Abnormal"));
    assert!(prompt.contains("skin_risk: High"));
    assert!(prompt.contains("pressure_distribution_index: 0.55"));
    assert!(prompt.contains("blood_pressure: 142/91"));
    assert!(prompt.contains("- Load Imbalance Detected"));
}

#[test]
fn prompt_omits_patient_name() {
    let prompt = build_summary_prompt(&summary());
    assert!(!prompt.contains("Maria Santos"));
}

#[test]
fn prompt_skips_absent_profile_and_alerts() {
    let mut s = summary();
    s.clinical_profile = ClinicalProfile::default();
    s.recent_alerts.clear();

    let prompt = build_summary_prompt(&s);
    assert!(!prompt.contains("<clinical_profile>"));
    assert!(!prompt.contains("<alerts>"));
    assert!(!prompt.contains("N/A"));
}

#[test]
fn reply_is_trimmed() {
    assert_eq!(
        accept_reply("  Gait symmetry is declining.\n").unwrap(),
        "Gait symmetry is declining."
    );
}

#[test]
fn empty_reply_is_rejected() {
    assert!(matches!(
        accept_reply("   "),
        Err(NarrativeError::ResponseParse(_))
    ));
}

#[test]
fn placeholder_reply_is_rejected() {
    assert!(matches!(
        accept_reply("AI analysis is Temporarily Unavailable."),
        Err(NarrativeError::Placeholder(_))
    ));
}

#[test]
fn blank_model_id_is_a_config_error() {
    assert!(matches!(
        BedrockNarrator::new(" ", "us-east-1"),
        Err(NarrativeError::Config(_))
    ));
}
