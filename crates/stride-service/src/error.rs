use stride_core::error::{CoreError, ValidationError};
use stride_narrative::error::NarrativeError;
use stride_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("invalid metric input: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("narrative error: {0}")]
    Narrative(#[from] NarrativeError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        ServiceError::Core(CoreError::NotFound {
            kind,
            id: id.to_string(),
        })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Core(CoreError::NotFound { .. }))
    }
}
