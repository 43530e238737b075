use async_trait::async_trait;

use crate::error::SummarizeError;

/// Prompt-to-text generation with output length bounds in model tokens.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        prompt: &str,
        min_length: u32,
        max_length: u32,
    ) -> Result<String, SummarizeError>;
}
