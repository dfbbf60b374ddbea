use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use stride_narrative::bedrock::BedrockNarrator;
use stride_narrative::narrator::Narrator;

use crate::error::ServiceError;

/// Names a JSON file whose fields override the environment.
pub const CONFIG_PATH_VAR: &str = "STRIDE_CONFIG";

/// Largest freshness window a `SignedDuration` can hold, in hours.
pub const MAX_FRESHNESS_HOURS: i64 = i64::MAX / 3600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bucket: String,
    pub region: String,
    /// Bedrock model for summary narratives. `None` disables narration.
    pub narrative_model: Option<String>,
    pub trend_window: usize,
    pub average_window: usize,
    pub freshness_hours: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bucket: "stride".to_string(),
            region: "us-east-1".to_string(),
            narrative_model: None,
            trend_window: 7,
            average_window: 100,
            freshness_hours: 24,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from a variable lookup: defaults, then variables, then the
    /// file named by [`CONFIG_PATH_VAR`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceError> {
        let mut config = Self::default();

        if let Some(bucket) = lookup("STRIDE_BUCKET") {
            config.bucket = bucket;
        }
        if let Some(region) = lookup("AWS_REGION") {
            config.region = region;
        }
        config.narrative_model =
            lookup("STRIDE_NARRATIVE_MODEL").filter(|m| !m.trim().is_empty());
        if let Some(v) = lookup("STRIDE_TREND_WINDOW") {
            config.trend_window = parse_var("STRIDE_TREND_WINDOW", &v)?;
        }
        if let Some(v) = lookup("STRIDE_AVERAGE_WINDOW") {
            config.average_window = parse_var("STRIDE_AVERAGE_WINDOW", &v)?;
        }
        if let Some(v) = lookup("STRIDE_FRESHNESS_HOURS") {
            config.freshness_hours = parse_var("STRIDE_FRESHNESS_HOURS", &v)?;
        }

        if let Some(path) = lookup(CONFIG_PATH_VAR) {
            config = config.merge_file(Path::new(&path))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Overlay the fields present in a JSON file. Absent fields keep their
    /// current values.
    pub fn merge_file(self, path: &Path) -> Result<Self, ServiceError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::Config(format!("failed to read config at {}: {e}", path.display()))
        })?;
        let overrides: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| ServiceError::Config(format!("{}: {e}", path.display())))?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(ServiceError::Config(format!(
                "{}: expected a JSON object",
                path.display()
            )));
        };

        let mut merged = serde_json::to_value(&self)
            .map_err(|e| ServiceError::Config(e.to_string()))?;
        if let Some(fields) = merged.as_object_mut() {
            fields.extend(overrides);
        }
        serde_json::from_value(merged)
            .map_err(|e| ServiceError::Config(format!("{}: {e}", path.display())))
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.bucket.trim().is_empty() {
            return Err(ServiceError::Config("bucket must not be empty".to_string()));
        }
        if self.trend_window == 0 {
            return Err(ServiceError::Config("trend_window must be positive".to_string()));
        }
        if self.average_window == 0 {
            return Err(ServiceError::Config("average_window must be positive".to_string()));
        }
        if self.freshness_hours <= 0 {
            return Err(ServiceError::Config("freshness_hours must be positive".to_string()));
        }
        if self.freshness_hours > MAX_FRESHNESS_HOURS {
            return Err(ServiceError::Config(format!(
                "freshness_hours must be at most {MAX_FRESHNESS_HOURS}"
            )));
        }
        Ok(())
    }

    /// Clamped to the range a `SignedDuration` can hold.
    pub fn freshness_window(&self) -> SignedDuration {
        SignedDuration::from_hours(self.freshness_hours.clamp(0, MAX_FRESHNESS_HOURS))
    }

    /// The Bedrock narrator for `narrative_model`, if one is configured.
    pub fn narrator(&self) -> Result<Option<Arc<dyn Narrator>>, ServiceError> {
        let Some(model) = &self.narrative_model else {
            return Ok(None);
        };
        let narrator = BedrockNarrator::new(model, &self.region)?;
        Ok(Some(Arc::new(narrator)))
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ServiceError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ServiceError::Config(format!("{name}={value:?}: {e}")))
}
