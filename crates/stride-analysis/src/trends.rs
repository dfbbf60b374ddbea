//! Multi-record aggregation: chart series and rolling averages.

use stride_core::models::metric::DailyRecord;
use stride_core::models::score::ClinicalRisk;
use stride_core::models::summary::{AverageMetrics, RollingAverages};
use stride_core::models::trend::TrendSeries;

/// Default number of qualifying records in a dashboard trend window.
pub const DEFAULT_TREND_WINDOW: usize = 7;

/// Maximum number of records averaged for a summary.
pub const AVERAGE_WINDOW: usize = 100;

/// Records ordered newest first. Ties keep their input order.
fn newest_first(records: &[DailyRecord]) -> Vec<&DailyRecord> {
    let mut sorted: Vec<&DailyRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

/// The most recent record with a positive walking speed.
pub fn latest_qualifying(records: &[DailyRecord]) -> Option<&DailyRecord> {
    newest_first(records)
        .into_iter()
        .find(|r| r.metrics.is_qualifying())
}

/// Series over the `window` most recent qualifying records, oldest first.
pub fn aggregate_trends(records: &[DailyRecord], window: usize) -> TrendSeries {
    let mut recent: Vec<&DailyRecord> = newest_first(records)
        .into_iter()
        .filter(|r| r.metrics.is_qualifying())
        .take(window)
        .collect();
    recent.reverse();

    let mut trends = TrendSeries::default();
    for record in recent {
        let m = &record.metrics;
        trends.health_score.push(record.prosthetic_health_score);
        trends.symmetry.push(m.gait_symmetry_index);
        trends.walking_speed.push(m.walking_speed_mps);
        trends.skin_temp.push(m.skin_temperature_c);
        trends.moisture.push(m.skin_moisture);
        trends
            .pressure_distribution
            .push(m.pressure_distribution_index);
    }
    trends
}

/// Means over the [`AVERAGE_WINDOW`] most recent records, qualifying or not.
///
/// Labels are taken from the newest record in the window. An empty input
/// yields zeros and `No Data` labels.
pub fn aggregate_averages(records: &[DailyRecord]) -> RollingAverages {
    let window: Vec<&DailyRecord> = newest_first(records)
        .into_iter()
        .take(AVERAGE_WINDOW)
        .collect();

    let Some(latest) = window.first() else {
        return RollingAverages::empty();
    };

    let n = window.len() as f64;
    let mean = |f: fn(&DailyRecord) -> f64| window.iter().map(|&r| f(r)).sum::<f64>() / n;

    RollingAverages {
        record_count: window.len(),
        metrics: AverageMetrics {
            avg_step_length_cm: mean(|r| r.metrics.step_length_cm),
            avg_cadence_spm: mean(|r| r.metrics.cadence_spm),
            avg_walking_speed_mps: mean(|r| r.metrics.walking_speed_mps),
            avg_gait_symmetry_index: mean(|r| r.metrics.gait_symmetry_index),
            avg_pressure_distribution_index: mean(|r| r.metrics.pressure_distribution_index),
            avg_skin_temperature_c: mean(|r| r.metrics.skin_temperature_c),
            avg_skin_moisture: mean(|r| r.metrics.skin_moisture),
        },
        prosthetic_health_score: mean(|r| r.prosthetic_health_score),
        gait_abnormality: latest.gait_abnormality,
        skin_risk: ClinicalRisk::from(latest.skin_risk),
    }
}
