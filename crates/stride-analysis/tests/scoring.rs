use stride_analysis::normalize::normalize;
use stride_analysis::scoring::{gait_score, pressure_risk, skin_risk, skin_risk_score};
use stride_analysis::score_record;
use stride_core::models::metric::{MetricRecord, RawMetricRecord};
use stride_core::models::profile::SubjectProfile;
use stride_core::models::score::RiskLevel;

#[allow(clippy::too_many_arguments)]
fn record(
    symmetry: f64,
    speed: f64,
    step: f64,
    cadence: f64,
    pressure: f64,
    temp: f64,
    moisture: f64,
    wear: f64,
) -> MetricRecord {
    MetricRecord {
        step_length_cm: step,
        cadence_spm: cadence,
        walking_speed_mps: speed,
        gait_symmetry_index: symmetry,
        skin_temperature_c: temp,
        skin_moisture: moisture,
        pressure_distribution_index: pressure,
        daily_wear_hours: wear,
    }
}

fn healthy() -> MetricRecord {
    record(0.95, 1.3, 65.0, 95.0, 0.85, 32.0, 40.0, 6.0)
}

#[test]
fn normalize_fills_defaults() {
    let m = normalize(&RawMetricRecord::default());
    assert_eq!(m.gait_symmetry_index, 1.0);
    assert_eq!(m.walking_speed_mps, 1.0);
    assert_eq!(m.step_length_cm, 50.0);
    assert_eq!(m.cadence_spm, 100.0);
    assert_eq!(m.pressure_distribution_index, 1.0);
    assert_eq!(m.skin_temperature_c, 30.0);
    assert_eq!(m.skin_moisture, 50.0);
    assert_eq!(m.daily_wear_hours, 8.0);
}

#[test]
fn normalize_keeps_present_fields_and_ignores_unknown() {
    let raw: RawMetricRecord = serde_json::from_str(
        r#"{"cadence_spm": 88.0, "skin_moisture": 72.5, "device_serial": "X-12"}"#,
    )
    .unwrap();
    let m = normalize(&raw);
    assert_eq!(m.cadence_spm, 88.0);
    assert_eq!(m.skin_moisture, 72.5);
    assert_eq!(m.step_length_cm, 50.0);
}

#[test]
fn default_record_scores() {
    // speed 1.0 costs 4, step 50 costs 5
    let m = normalize(&RawMetricRecord::default());
    assert_eq!(gait_score(&m), 91.0);
}

#[test]
fn gait_score_stays_in_bounds() {
    let worst = record(-5.0, -3.0, 0.0, 0.0, 0.0, 40.0, 100.0, 24.0);
    assert_eq!(gait_score(&worst), 0.0);

    let best = record(2.0, 5.0, 120.0, 180.0, 1.0, 30.0, 40.0, 6.0);
    assert_eq!(gait_score(&best), 100.0);

    for symmetry in [0.0, 0.2, 0.5, 0.89, 1.0] {
        for speed in [0.0, 0.4, 1.2, 2.0] {
            let s = gait_score(&record(symmetry, speed, 30.0, 60.0, 0.5, 30.0, 50.0, 8.0));
            assert!((0.0..=100.0).contains(&s), "score {s} out of range");
        }
    }
}

#[test]
fn gait_score_is_monotone_in_symmetry() {
    let mut previous = f64::INFINITY;
    for i in (0..=20).rev() {
        let symmetry = i as f64 * 0.05;
        let mut m = healthy();
        m.gait_symmetry_index = symmetry;
        let score = gait_score(&m);
        assert!(score <= previous, "score rose from {previous} to {score} at {symmetry}");
        previous = score;
    }
}

#[test]
fn gait_score_is_monotone_in_cadence_and_step() {
    let mut prev_cadence = f64::INFINITY;
    let mut prev_step = f64::INFINITY;
    for v in (0..=100).rev().step_by(5) {
        let mut m = healthy();
        m.cadence_spm = v as f64;
        let s = gait_score(&m);
        assert!(s <= prev_cadence);
        prev_cadence = s;

        let mut m = healthy();
        m.step_length_cm = v as f64;
        let s = gait_score(&m);
        assert!(s <= prev_step);
        prev_step = s;
    }
}

#[test]
fn gait_score_rounds_to_two_decimals() {
    // cadence 89.99 costs 0.002
    let mut m = healthy();
    m.cadence_spm = 89.99;
    assert_eq!(gait_score(&m), 100.0);
}

#[test]
fn pressure_risk_boundaries() {
    let at = |index: f64| {
        let mut m = healthy();
        m.pressure_distribution_index = index;
        pressure_risk(&m)
    };
    assert_eq!(at(0.59), RiskLevel::High);
    assert_eq!(at(0.6), RiskLevel::Moderate);
    assert_eq!(at(0.79), RiskLevel::Moderate);
    assert_eq!(at(0.8), RiskLevel::Low);
    assert_eq!(at(1.0), RiskLevel::Low);
}

#[test]
fn skin_risk_levels() {
    let m = record(0.95, 1.3, 65.0, 95.0, 0.85, 35.0, 71.0, 13.0);
    assert_eq!(skin_risk_score(&m), 5);
    assert_eq!(skin_risk(&m), RiskLevel::High);

    let m = record(0.95, 1.3, 65.0, 95.0, 0.85, 35.0, 50.0, 8.0);
    assert_eq!(skin_risk_score(&m), 2);
    assert_eq!(skin_risk(&m), RiskLevel::Moderate);

    let m = record(0.95, 1.3, 65.0, 95.0, 0.85, 30.0, 50.0, 8.0);
    assert_eq!(skin_risk_score(&m), 0);
    assert_eq!(skin_risk(&m), RiskLevel::Low);
}

#[test]
fn skin_risk_wear_alone_stays_low() {
    let m = record(0.95, 1.3, 65.0, 95.0, 0.85, 30.0, 50.0, 16.0);
    assert_eq!(skin_risk_score(&m), 1);
    assert_eq!(skin_risk(&m), RiskLevel::Low);
}

#[test]
fn healthy_record_scores_low_everywhere() {
    let result = score_record(&healthy(), &SubjectProfile::default());
    assert_eq!(result.gait_score, 100.0);
    assert_eq!(result.pressure_risk, RiskLevel::Low);
    assert_eq!(result.skin_risk, RiskLevel::Low);
    assert_eq!(result.overall_risk_level, RiskLevel::Low);
    assert!(result.flags.is_empty());
    assert!(result.recommendations.is_empty());
}

#[test]
fn impaired_record_is_high_risk() {
    let m = record(0.5, 0.5, 30.0, 60.0, 0.4, 36.0, 80.0, 14.0);
    let result = score_record(&m, &SubjectProfile::default());
    assert_eq!(result.gait_score, 45.0);
    assert_eq!(result.pressure_risk, RiskLevel::High);
    assert_eq!(result.skin_risk, RiskLevel::High);
    assert_eq!(result.overall_risk_level, RiskLevel::High);
    assert_eq!(
        result.flags,
        vec!["Abnormal Gait Symmetry", "High Pressure Risk", "High Skin Risk"]
    );
}
