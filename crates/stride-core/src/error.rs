use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// A metric value outside its declared numeric domain.
///
/// Rejecting these is the caller's job; the analysis functions themselves
/// trust their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, value: f64, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value,
            message: message.into(),
        }
    }
}
