use trendpost_core::Topic;

use crate::prompt::{build_prompt, SENTINEL_BODY, SUMMARY_MAX_LENGTH, SUMMARY_MIN_LENGTH};
use crate::summarizer::Summarizer;

/// Whether a post body came from the model or is the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Failed,
}

/// Body text for one topic, before formatting.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub topic: Topic,
    pub body: String,
    pub outcome: Outcome,
}

/// Generate the body for `topic` with a single model call.
///
/// Never fails: a model error is logged and the body becomes
/// [`SENTINEL_BODY`] so the caller can still emit the post.
pub async fn generate_post(summarizer: &dyn Summarizer, topic: &Topic) -> GeneratedPost {
    tracing::info!(topic = %topic, source = %topic.source, "generating blog post");

    let prompt = build_prompt(&topic.text);
    match summarizer
        .summarize(&prompt, SUMMARY_MIN_LENGTH, SUMMARY_MAX_LENGTH)
        .await
    {
        Ok(body) => GeneratedPost {
            topic: topic.clone(),
            body,
            outcome: Outcome::Generated,
        },
        Err(e) => {
            tracing::warn!(topic = %topic, error = %e, "blog post generation failed");
            GeneratedPost {
                topic: topic.clone(),
                body: SENTINEL_BODY.to_string(),
                outcome: Outcome::Failed,
            }
        }
    }
}

#[cfg(test)]
#[path = "post_test.rs"]
mod tests;
