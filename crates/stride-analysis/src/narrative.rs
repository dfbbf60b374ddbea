//! Rule-based clinical narrative.

use stride_core::models::score::ClinicalRisk;
use stride_core::models::summary::RollingAverages;

use crate::scoring::round_to;

/// Symmetry on a 0–100 scale.
///
/// Values below 1.1 are taken to be 0–1 fractions and multiplied by 100;
/// anything else is assumed to be pre-scaled. A 0–100 value that happens to
/// sit just above 1 is indistinguishable from a fraction, so this stays a
/// heuristic rather than a unit contract.
pub fn scaled_symmetry(symmetry: f64) -> f64 {
    if symmetry < 1.1 {
        symmetry * 100.0
    } else {
        symmetry
    }
}

/// Exactly four lines, in order: overall health, gait symmetry, step and
/// cadence, skin risk.
pub fn clinical_summary_lines(averages: &RollingAverages) -> Vec<String> {
    let health_score = round_to(averages.prosthetic_health_score, 1);
    let symmetry = scaled_symmetry(averages.metrics.avg_gait_symmetry_index);
    let step_length = round_to(averages.metrics.avg_step_length_cm, 1);
    let cadence = round_to(averages.metrics.avg_cadence_spm, 1);

    let health_line = if health_score >= 80.0 {
        "Overall prosthetic performance is stable with strong biomechanical efficiency."
    } else if health_score >= 60.0 {
        "Moderate prosthetic stability observed; minor biomechanical deviations detected."
    } else {
        "Reduced prosthetic efficiency detected; clinical review recommended."
    };

    let symmetry_line = if symmetry >= 90.0 {
        "Gait symmetry is within optimal clinical range."
    } else if symmetry >= 75.0 {
        "Mild asymmetry present; corrective gait monitoring advised."
    } else {
        "Significant gait asymmetry detected; rehabilitation adjustment suggested."
    };

    let skin_line = match averages.skin_risk {
        ClinicalRisk::High => {
            "Elevated skin risk detected; immediate prosthetic fit assessment recommended."
        }
        ClinicalRisk::Moderate => {
            "Moderate skin stress observed; monitor tissue condition closely."
        }
        ClinicalRisk::Low | ClinicalRisk::NoData => {
            "Skin integrity remains within safe tolerance levels."
        }
    };

    vec![
        health_line.to_string(),
        symmetry_line.to_string(),
        format!(
            "Step length averages {step_length:.1} cm with cadence at {cadence:.1} steps/min, \
             indicating functional mobility status."
        ),
        skin_line.to_string(),
    ]
}
