use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-metric chart series, oldest first. Index `i` of every series refers to
/// the same record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSeries {
    pub health_score: Vec<f64>,
    pub symmetry: Vec<f64>,
    pub walking_speed: Vec<f64>,
    pub skin_temp: Vec<f64>,
    pub moisture: Vec<f64>,
    pub pressure_distribution: Vec<f64>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.health_score.len()
    }

    pub fn is_empty(&self) -> bool {
        self.health_score.is_empty()
    }
}
