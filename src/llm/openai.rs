use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::llm::provider::ModelProvider;
use crate::llm::schema::OutputSchema;

/// Deadline for one generation, independent of the fetch deadlines.
const MODEL_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: Value,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(MODEL_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: config.model_api_key.clone(),
            model: config.model_name.clone(),
            base_url: config.model_api_url.clone(),
        }
    }
}

fn response_format(schema: &OutputSchema) -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": schema.name,
            "strict": true,
            "schema": schema.schema,
        }
    })
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    async fn generate(
        &self,
        prompt: String,
        schema: &OutputSchema,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        tracing::debug!(
            "Sending ~{} prompt tokens to {} for schema {}",
            prompt.len() / 4,
            self.model,
            schema.name
        );

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            response_format: response_format(schema),
        };

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send();

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Timeout("model generation")),
            outcome = tokio::time::timeout(MODEL_TIMEOUT, request) => {
                outcome
                    .map_err(|_| Error::Timeout("model generation"))?
                    .map_err(|e| Error::Upstream(format!("model request failed: {}", e)))?
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "model API error ({}): {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("failed to parse model response: {}", e)))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(Error::EmptyModelResponse);
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}
