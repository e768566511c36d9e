use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::llm::schema::OutputSchema;

#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// One schema-constrained generation. The returned value is already
    /// parsed JSON; its shape is guaranteed by the named strict schema, so
    /// callers deserialize without re-validating.
    async fn generate(
        &self,
        prompt: String,
        schema: &OutputSchema,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value>;

    fn name(&self) -> &str;
}
