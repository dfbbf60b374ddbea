//! Prompt assembly for summary narration.
//!
//! The summary is rendered as an XML-style block so the model sees averages,
//! labels, and profile context as clearly separated sections.

use stride_core::models::summary::SummaryPayload;

pub const SYSTEM_PROMPT: &str = "You are a clinical assistant for prosthetic limb monitoring.

You only comment on:
- Prosthetic biomechanics
- Gait symmetry and stride metrics
- Skin risk and temperature monitoring
- Pressure distribution
- Rehabilitation tracking
- Device performance

Write two or three short paragraphs for the treating clinician interpreting the \
summary provided. Be concise, medically accurate, and professional. Do not \
repeat the raw numbers line by line and do not give a diagnosis.";

/// Render the user message for `summary`.
pub fn build_summary_prompt(summary: &SummaryPayload) -> String {
    let m = &summary.metrics;
    let c = &summary.classification;
    let p = &summary.clinical_profile;

    let mut block = String::from("<patient_summary>\n");

    block.push_str(&format!("<patient age=\"{}\" />\n", summary.patient_age));

    block.push_str("<averages>\n");
    block.push_str(&format!("step_length_cm: {:.1}\n", m.avg_step_length_cm));
    block.push_str(&format!("cadence_spm: {:.1}\n", m.avg_cadence_spm));
    block.push_str(&format!("walking_speed_mps: {:.2}\n", m.avg_walking_speed_mps));
    block.push_str(&format!("gait_symmetry_index: {:.2}\n", m.avg_gait_symmetry_index));
    block.push_str(&format!(
        "pressure_distribution_index: {:.2}\n",
        m.avg_pressure_distribution_index
    ));
    block.push_str(&format!("skin_temperature_c: {:.1}\n", m.avg_skin_temperature_c));
    block.push_str(&format!("skin_moisture: {:.1}\n", m.avg_skin_moisture));
    block.push_str("</averages>\n");

    block.push_str("<classification>\n");
    block.push_str(&format!("gait_abnormality: {}\n", c.gait_abnormality));
    block.push_str(&format!("skin_risk: {}\n", c.skin_risk));
    block.push_str(&format!("prosthetic_health_score: {:.2}\n", c.prosthetic_health_score));
    block.push_str(&format!("overall_clinical_risk: {}\n", c.overall_clinical_risk));
    block.push_str("</classification>\n");

    // Absent profile fields are left out rather than rendered as filler.
    let mut profile = String::new();
    if let Some(gender) = &p.gender {
        profile.push_str(&format!("gender: {gender}\n"));
    }
    if let Some(bmi) = p.bmi {
        profile.push_str(&format!("bmi: {bmi:.1}\n"));
    }
    if let Some(bp) = &p.blood_pressure {
        profile.push_str(&format!("blood_pressure: {bp}\n"));
    }
    if let Some(sugar) = p.blood_sugar_mg_dl {
        profile.push_str(&format!("blood_sugar_mg_dl: {sugar}\n"));
    }
    if !p.medical_conditions.is_empty() {
        profile.push_str(&format!(
            "medical_conditions: {}\n",
            p.medical_conditions.join(", ")
        ));
    }
    if !profile.is_empty() {
        block.push_str("<clinical_profile>\n");
        block.push_str(&profile);
        block.push_str("</clinical_profile>\n");
    }

    if !summary.recent_alerts.is_empty() {
        block.push_str("<alerts>\n");
        for alert in &summary.recent_alerts {
            block.push_str(&format!("- {alert}\n"));
        }
        block.push_str("</alerts>\n");
    }

    block.push_str("</patient_summary>");
    block
}
