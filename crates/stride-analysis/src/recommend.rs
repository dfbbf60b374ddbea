use stride_core::models::profile::SubjectProfile;
use stride_core::models::score::RiskLevel;

pub const FLAG_ABNORMAL_GAIT: &str = "Abnormal Gait Symmetry";
pub const FLAG_HIGH_PRESSURE: &str = "High Pressure Risk";
pub const FLAG_HIGH_SKIN: &str = "High Skin Risk";

/// Short machine-oriented flags, in rule order.
pub fn flags(gait_score: f64, pressure_risk: RiskLevel, skin_risk: RiskLevel) -> Vec<String> {
    let mut flags = Vec::new();
    if gait_score < 75.0 {
        flags.push(FLAG_ABNORMAL_GAIT.to_string());
    }
    if pressure_risk == RiskLevel::High {
        flags.push(FLAG_HIGH_PRESSURE.to_string());
    }
    if skin_risk == RiskLevel::High {
        flags.push(FLAG_HIGH_SKIN.to_string());
    }
    flags
}

/// Free-text clinical recommendations, in rule order (not severity order).
pub fn recommendations(
    gait_score: f64,
    pressure_risk: RiskLevel,
    skin_risk: RiskLevel,
    profile: &SubjectProfile,
) -> Vec<String> {
    let mut out = Vec::new();

    if gait_score < 70.0 {
        out.push("Significant gait asymmetry or reduced mobility detected.".to_string());
    }

    match pressure_risk {
        RiskLevel::High => out.push(
            "Severe pressure imbalance. Immediate socket inspection recommended.".to_string(),
        ),
        RiskLevel::Moderate => {
            out.push("Minor pressure imbalance detected. Monitor for discomfort.".to_string())
        }
        RiskLevel::Low => {}
    }

    match skin_risk {
        RiskLevel::High => out.push("Critical risk of skin irritation or breakdown.".to_string()),
        RiskLevel::Moderate => out.push(
            "Elevated skin temperature/moisture. Ensure proper stump hygiene.".to_string(),
        ),
        RiskLevel::Low => {}
    }

    if profile.effective_bmi().is_some_and(|bmi| bmi > 30.0) {
        out.push("High BMI may increase mechanical stress on the prosthesis.".to_string());
    }

    out
}
