//! Single-record scoring: gait score, pressure risk, skin risk.

use stride_core::models::metric::MetricRecord;
use stride_core::models::score::RiskLevel;

/// Round to `places` decimal digits.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Gait score in `[0, 100]`, rounded to two decimals.
///
/// Starts at 100 and subtracts a linear penalty for each metric below its
/// normal threshold: symmetry 0.9, speed 1.2 m/s, step length 60 cm,
/// cadence 90 spm. Metrics at or above threshold cost nothing.
pub fn gait_score(record: &MetricRecord) -> f64 {
    let mut score = 100.0;

    score -= f64::max(0.0, (0.9 - record.gait_symmetry_index) * 50.0);
    score -= f64::max(0.0, (1.2 - record.walking_speed_mps) * 20.0);
    score -= f64::max(0.0, (60.0 - record.step_length_cm) * 0.5);
    score -= f64::max(0.0, (90.0 - record.cadence_spm) * 0.2);

    round_to(score.clamp(0.0, 100.0), 2)
}

/// Socket load risk. Exactly 0.6 and 0.8 fall into the less severe bucket.
pub fn pressure_risk(record: &MetricRecord) -> RiskLevel {
    let index = record.pressure_distribution_index;
    if index < 0.6 {
        RiskLevel::High
    } else if index < 0.8 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Integer skin stress score: +2 above 34 °C, +2 above 70 moisture, +1 for
/// more than 12 hours of wear.
pub fn skin_risk_score(record: &MetricRecord) -> u8 {
    let mut score = 0;
    if record.skin_temperature_c > 34.0 {
        score += 2;
    }
    if record.skin_moisture > 70.0 {
        score += 2;
    }
    if record.daily_wear_hours > 12.0 {
        score += 1;
    }
    score
}

pub fn skin_risk(record: &MetricRecord) -> RiskLevel {
    match skin_risk_score(record) {
        s if s >= 4 => RiskLevel::High,
        s if s >= 2 => RiskLevel::Moderate,
        _ => RiskLevel::Low,
    }
}
