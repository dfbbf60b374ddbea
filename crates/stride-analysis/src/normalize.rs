use stride_core::models::metric::{MetricRecord, RawMetricRecord};

pub const DEFAULT_GAIT_SYMMETRY_INDEX: f64 = 1.0;
pub const DEFAULT_WALKING_SPEED_MPS: f64 = 1.0;
pub const DEFAULT_STEP_LENGTH_CM: f64 = 50.0;
pub const DEFAULT_CADENCE_SPM: f64 = 100.0;
pub const DEFAULT_PRESSURE_DISTRIBUTION_INDEX: f64 = 1.0;
pub const DEFAULT_SKIN_TEMPERATURE_C: f64 = 30.0;
pub const DEFAULT_SKIN_MOISTURE: f64 = 50.0;
pub const DEFAULT_DAILY_WEAR_HOURS: f64 = 8.0;

/// Fill absent fields with their neutral defaults. Never fails.
pub fn normalize(raw: &RawMetricRecord) -> MetricRecord {
    MetricRecord {
        step_length_cm: raw.step_length_cm.unwrap_or(DEFAULT_STEP_LENGTH_CM),
        cadence_spm: raw.cadence_spm.unwrap_or(DEFAULT_CADENCE_SPM),
        walking_speed_mps: raw.walking_speed_mps.unwrap_or(DEFAULT_WALKING_SPEED_MPS),
        gait_symmetry_index: raw
            .gait_symmetry_index
            .unwrap_or(DEFAULT_GAIT_SYMMETRY_INDEX),
        skin_temperature_c: raw
            .skin_temperature_c
            .unwrap_or(DEFAULT_SKIN_TEMPERATURE_C),
        skin_moisture: raw.skin_moisture.unwrap_or(DEFAULT_SKIN_MOISTURE),
        pressure_distribution_index: raw
            .pressure_distribution_index
            .unwrap_or(DEFAULT_PRESSURE_DISTRIBUTION_INDEX),
        daily_wear_hours: raw.daily_wear_hours.unwrap_or(DEFAULT_DAILY_WEAR_HOURS),
    }
}
