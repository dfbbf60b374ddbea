use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Clinical context for a prosthesis wearer. Read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubjectProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    pub blood_pressure_systolic: Option<u32>,
    pub blood_pressure_diastolic: Option<u32>,
    pub blood_sugar_mg_dl: Option<u32>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
}

impl SubjectProfile {
    /// Recorded BMI, or one derived from height and weight when both are known.
    pub fn effective_bmi(&self) -> Option<f64> {
        self.bmi.or_else(|| match (self.height_cm, self.weight_kg) {
            (Some(h), Some(w)) if h > 0.0 => {
                let meters = h / 100.0;
                Some((w / (meters * meters) * 100.0).round() / 100.0)
            }
            _ => None,
        })
    }

    /// Blood pressure as `systolic/diastolic`, when both readings exist.
    pub fn blood_pressure(&self) -> Option<String> {
        match (self.blood_pressure_systolic, self.blood_pressure_diastolic) {
            (Some(sys), Some(dia)) => Some(format!("{sys}/{dia}")),
            _ => None,
        }
    }
}
