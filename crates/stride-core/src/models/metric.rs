use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::score::{GaitAbnormality, RiskLevel};
use crate::error::ValidationError;

/// A metric reading as it arrives from ingestion or storage. Every field may
/// be absent; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawMetricRecord {
    pub step_length_cm: Option<f64>,
    pub cadence_spm: Option<f64>,
    pub walking_speed_mps: Option<f64>,
    pub gait_symmetry_index: Option<f64>,
    pub skin_temperature_c: Option<f64>,
    pub skin_moisture: Option<f64>,
    pub pressure_distribution_index: Option<f64>,
    pub daily_wear_hours: Option<f64>,
}

/// One canonical sensor/session reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricRecord {
    pub step_length_cm: f64,
    pub cadence_spm: f64,
    pub walking_speed_mps: f64,
    /// Left/right stride balance, expected 0–1.
    pub gait_symmetry_index: f64,
    pub skin_temperature_c: f64,
    /// 0–100.
    pub skin_moisture: f64,
    /// 0–1, lower means more load imbalance.
    pub pressure_distribution_index: f64,
    pub daily_wear_hours: f64,
}

impl MetricRecord {
    /// Check the declared numeric domain of every field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("step_length_cm", self.step_length_cm),
            ("cadence_spm", self.cadence_spm),
            ("walking_speed_mps", self.walking_speed_mps),
            ("gait_symmetry_index", self.gait_symmetry_index),
            ("skin_temperature_c", self.skin_temperature_c),
            ("skin_moisture", self.skin_moisture),
            ("pressure_distribution_index", self.pressure_distribution_index),
            ("daily_wear_hours", self.daily_wear_hours),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::new(
                    field,
                    value,
                    format!("{field} must be a finite number"),
                ));
            }
        }

        let pdi = self.pressure_distribution_index;
        if !(0.0..=1.0).contains(&pdi) {
            return Err(ValidationError::new(
                "pressure_distribution_index",
                pdi,
                format!("pressure_distribution_index {pdi} is outside range [0, 1]"),
            ));
        }
        Ok(())
    }

    /// A record with non-positive walking speed is a sentinel entry and is
    /// excluded from trend series.
    pub fn is_qualifying(&self) -> bool {
        self.walking_speed_mps > 0.0
    }
}

/// A stored daily reading, stamped with the per-record assessment computed at
/// ingestion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyRecord {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub date: jiff::civil::Date,
    pub metrics: MetricRecord,
    pub gait_abnormality: GaitAbnormality,
    pub skin_risk: RiskLevel,
    pub prosthetic_health_score: f64,
    pub created_at: jiff::Timestamp,
}
