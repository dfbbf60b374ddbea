use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use futures::future::BoxFuture;
use tokio::sync::OnceCell;
use tracing::info;
use uuid::Uuid;

use stride_core::models::summary::SummaryPayload;

use crate::error::NarrativeError;
use crate::narrator::{Narrator, accept_reply};
use crate::prompt::{SYSTEM_PROMPT, build_summary_prompt};

/// Narrator backed by the Bedrock Converse API.
///
/// The runtime client is built on first use and shared by every later call.
pub struct BedrockNarrator {
    model_id: String,
    region: String,
    client: OnceCell<Client>,
}

impl BedrockNarrator {
    pub fn new(
        model_id: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, NarrativeError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(NarrativeError::Config("narrative model id is empty".to_string()));
        }
        Ok(Self {
            model_id,
            region: region.into(),
            client: OnceCell::new(),
        })
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let config = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(self.region.clone()))
                    .load()
                    .await;
                Client::new(&config)
            })
            .await
    }

    async fn invoke(&self, summary: &SummaryPayload) -> Result<String, NarrativeError> {
        let invocation_id = Uuid::new_v4();
        info!(
            invocation_id = %invocation_id,
            model = %self.model_id,
            "requesting summary narrative"
        );

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(build_summary_prompt(summary)))
            .build()
            .map_err(|e| NarrativeError::Invocation(e.to_string()))?;

        let response = self
            .client()
            .await
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
            .messages(message)
            .send()
            .await
            .map_err(|e| NarrativeError::Invocation(e.into_service_error().to_string()))?;

        let output = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| NarrativeError::ResponseParse("no message in response".to_string()))?;

        let text = output
            .content()
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("");

        let insight = accept_reply(&text)?;
        info!(
            invocation_id = %invocation_id,
            chars = insight.len(),
            "summary narrative complete"
        );
        Ok(insight)
    }
}

impl Narrator for BedrockNarrator {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn narrate<'a>(
        &'a self,
        summary: &'a SummaryPayload,
    ) -> BoxFuture<'a, Result<String, NarrativeError>> {
        Box::pin(self.invoke(summary))
    }
}
