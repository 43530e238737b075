//! Headline scraping from static HTML pages.

use async_trait::async_trait;
use scraper::{Html, Selector};
use trendpost_core::{ScrapeTarget, Topic};

use super::build_http_client;
use crate::error::SourceError;
use crate::source::TopicSource;
use crate::MAX_TOPICS_PER_SOURCE;

/// Topics taken from the text of elements matching a CSS selector.
pub struct HtmlTopicSource {
    client: reqwest::Client,
    target: ScrapeTarget,
    selector: Selector,
}

impl HtmlTopicSource {
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidSelector`] if the target's selector does
    /// not parse, or [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(
        target: ScrapeTarget,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let selector =
            Selector::parse(&target.selector).map_err(|e| SourceError::InvalidSelector {
                selector: target.selector.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            target,
            selector,
        })
    }
}

#[async_trait]
impl TopicSource for HtmlTopicSource {
    fn name(&self) -> &str {
        &self.target.name
    }

    async fn fetch(&self) -> Result<Vec<Topic>, SourceError> {
        let response = self
            .client
            .get(&self.target.url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.target.url.clone(),
            });
        }

        let body = response.text().await?;
        Ok(extract_topics(&body, &self.selector, &self.target.name))
    }
}

/// Whitespace-collapsed text of the first matching elements. An element with
/// no text still takes its slot as an empty topic.
pub(crate) fn extract_topics(html: &str, selector: &Selector, source: &str) -> Vec<Topic> {
    let document = Html::parse_document(html);
    document
        .select(selector)
        .take(MAX_TOPICS_PER_SOURCE)
        .map(|element| Topic::new(clean_text(&element.text().collect::<String>()), source))
        .collect()
}

fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
