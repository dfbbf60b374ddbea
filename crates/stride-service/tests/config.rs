use std::collections::HashMap;

use jiff::SignedDuration;
use stride_narrative::error::NarrativeError;
use stride_narrative::narrator::Narrator;
use stride_service::config::{CONFIG_PATH_VAR, MAX_FRESHNESS_HOURS, ServiceConfig};
use stride_service::error::ServiceError;
use uuid::Uuid;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_without_variables() {
    let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.bucket, "stride");
    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.narrative_model, None);
    assert_eq!(config.freshness_window(), SignedDuration::from_hours(24));
}

#[test]
fn variables_override_defaults() {
    let config = ServiceConfig::from_lookup(lookup(&[
        ("STRIDE_BUCKET", "clinic-data"),
        ("AWS_REGION", "eu-west-1"),
        ("STRIDE_NARRATIVE_MODEL", "anthropic.claude-3-haiku"),
        ("STRIDE_TREND_WINDOW", "14"),
        ("STRIDE_FRESHNESS_HOURS", " 6 "),
    ]))
    .unwrap();

    assert_eq!(config.bucket, "clinic-data");
    assert_eq!(config.region, "eu-west-1");
    assert_eq!(config.narrative_model.as_deref(), Some("anthropic.claude-3-haiku"));
    assert_eq!(config.trend_window, 14);
    assert_eq!(config.average_window, 100);
    assert_eq!(config.freshness_hours, 6);
}

#[test]
fn blank_model_disables_narration() {
    let config =
        ServiceConfig::from_lookup(lookup(&[("STRIDE_NARRATIVE_MODEL", "  ")])).unwrap();
    assert_eq!(config.narrative_model, None);
    assert!(config.narrator().unwrap().is_none());
}

#[test]
fn narrator_uses_configured_model() {
    let config = ServiceConfig::from_lookup(lookup(&[(
        "STRIDE_NARRATIVE_MODEL",
        "anthropic.claude-3-haiku",
    )]))
    .unwrap();
    let narrator = config.narrator().unwrap().unwrap();
    assert_eq!(narrator.model_id(), "anthropic.claude-3-haiku");
}

#[test]
fn blank_model_in_struct_is_a_narrative_error() {
    let config = ServiceConfig {
        narrative_model: Some(" ".to_string()),
        ..Default::default()
    };
    let err = config.narrator().err().unwrap();
    assert!(matches!(err, ServiceError::Narrative(NarrativeError::Config(_))));
}

#[test]
fn invalid_number_is_a_config_error() {
    let err =
        ServiceConfig::from_lookup(lookup(&[("STRIDE_TREND_WINDOW", "seven")])).unwrap_err();
    assert!(matches!(err, ServiceError::Config(ref msg) if msg.contains("STRIDE_TREND_WINDOW")));
}

#[test]
fn zero_window_is_rejected() {
    let err =
        ServiceConfig::from_lookup(lookup(&[("STRIDE_AVERAGE_WINDOW", "0")])).unwrap_err();
    assert!(matches!(err, ServiceError::Config(_)));
}

#[test]
fn oversized_freshness_is_rejected() {
    let err = ServiceConfig::from_lookup(lookup(&[(
        "STRIDE_FRESHNESS_HOURS",
        "9223372036854775807",
    )]))
    .unwrap_err();
    assert!(matches!(err, ServiceError::Config(ref msg) if msg.contains("freshness_hours")));

    let largest = MAX_FRESHNESS_HOURS.to_string();
    let vars = [("STRIDE_FRESHNESS_HOURS", largest.as_str())];
    let config = ServiceConfig::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(config.freshness_window(), SignedDuration::from_hours(MAX_FRESHNESS_HOURS));
}

#[test]
fn unvalidated_freshness_window_does_not_overflow() {
    let config = ServiceConfig {
        freshness_hours: i64::MAX,
        ..Default::default()
    };
    assert_eq!(config.freshness_window(), SignedDuration::from_hours(MAX_FRESHNESS_HOURS));
}

#[test]
fn config_file_overrides_variables() {
    let path = std::env::temp_dir().join(format!("stride-config-{}.json", Uuid::new_v4()));
    std::fs::write(&path, r#"{ "bucket": "from-file", "freshness_hours": 12 }"#).unwrap();

    let config = ServiceConfig::from_lookup(lookup(&[
        ("STRIDE_BUCKET", "from-env"),
        ("STRIDE_TREND_WINDOW", "10"),
        (CONFIG_PATH_VAR, path.to_str().unwrap()),
    ]))
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.bucket, "from-file");
    assert_eq!(config.freshness_hours, 12);
    assert_eq!(config.trend_window, 10);
}

#[test]
fn missing_config_file_is_an_error() {
    let err = ServiceConfig::from_lookup(lookup(&[(CONFIG_PATH_VAR, "/nonexistent/stride.json")]))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Config(_)));
}
