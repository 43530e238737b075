use async_trait::async_trait;
use trendpost_core::Topic;

use crate::error::SourceError;

/// One upstream origin of trending topics.
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Short name used in logs and as the `source` of every topic produced.
    fn name(&self) -> &str;

    /// Fetch up to [`crate::MAX_TOPICS_PER_SOURCE`] topics in upstream order.
    async fn fetch(&self) -> Result<Vec<Topic>, SourceError>;
}

/// Run one source, turning any failure into an empty batch.
///
/// This is the only failure boundary for fetching: it applies to every
/// source alike, so a broken credential, network outage, or page layout
/// change costs that source's topics and nothing more.
pub async fn fetch_or_empty(source: &dyn TopicSource) -> Vec<Topic> {
    tracing::info!(source = source.name(), "fetching topics");

    match source.fetch().await {
        Ok(topics) => {
            tracing::debug!(
                source = source.name(),
                count = topics.len(),
                "collected topics"
            );
            topics
        }
        Err(e) => {
            tracing::warn!(
                source = source.name(),
                error = %e,
                "topic fetch failed; continuing without this source"
            );
            Vec::new()
        }
    }
}
