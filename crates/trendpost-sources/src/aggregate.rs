//! Topic aggregation across sources.

use trendpost_core::Topic;

use crate::source::{fetch_or_empty, TopicSource};

/// Concatenate per-source batches in the order given.
///
/// No deduplication, reordering, or capping: the result length is the sum
/// of the batch lengths.
#[must_use]
pub fn aggregate<I>(batches: I) -> Vec<Topic>
where
    I: IntoIterator<Item = Vec<Topic>>,
{
    batches.into_iter().flatten().collect()
}

/// Fetch every source one after another and aggregate the results.
///
/// Sources are awaited strictly in slice order. Failed sources contribute
/// an empty batch (see [`fetch_or_empty`]).
pub async fn collect_topics(sources: &[Box<dyn TopicSource>]) -> Vec<Topic> {
    let mut batches = Vec::with_capacity(sources.len());
    for source in sources {
        batches.push(fetch_or_empty(source.as_ref()).await);
    }

    let topics = aggregate(batches);
    tracing::info!(
        sources = sources.len(),
        topics = topics.len(),
        "topic collection finished"
    );
    topics
}
