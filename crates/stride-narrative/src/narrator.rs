use futures::future::BoxFuture;
use stride_core::models::summary::{SummaryPayload, is_placeholder_text};

use crate::error::NarrativeError;

/// Produces a free-text clinical insight for a composed summary.
pub trait Narrator: Send + Sync {
    /// Identifier of the backing model, for logging.
    fn model_id(&self) -> &str;

    fn narrate<'a>(
        &'a self,
        summary: &'a SummaryPayload,
    ) -> BoxFuture<'a, Result<String, NarrativeError>>;
}

/// Check a raw model reply before it is attached to a summary.
///
/// Empty replies and known placeholder phrases are rejected so they never
/// reach the cache.
pub fn accept_reply(reply: &str) -> Result<String, NarrativeError> {
    let text = reply.trim();
    if text.is_empty() {
        return Err(NarrativeError::ResponseParse("empty reply".to_string()));
    }
    if is_placeholder_text(text) {
        return Err(NarrativeError::Placeholder(text.to_string()));
    }
    Ok(text.to_string())
}
