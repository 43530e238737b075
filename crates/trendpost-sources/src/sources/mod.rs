//! Concrete topic sources.

mod html;
mod reddit;
mod x_trends;

pub use html::HtmlTopicSource;
pub use reddit::RedditSource;
pub use x_trends::XTrendsSource;

use std::time::Duration;

use trendpost_core::{AppConfig, ScrapeTarget};

use crate::error::SourceError;
use crate::source::TopicSource;

/// Build a `reqwest` client with the shared timeout and user agent.
pub(crate) fn build_http_client(
    timeout_secs: u64,
    user_agent: &str,
) -> Result<reqwest::Client, SourceError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Check the status and decode a JSON body, keeping the decode error typed.
pub(crate) async fn read_json<T>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, SourceError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

/// The production source line-up, in aggregation order: Reddit, X, then
/// each HTML scrape target in configured order.
///
/// # Errors
///
/// Returns [`SourceError`] if an HTTP client cannot be built or a target's
/// selector does not parse.
pub fn default_sources(
    config: &AppConfig,
    targets: &[ScrapeTarget],
) -> Result<Vec<Box<dyn TopicSource>>, SourceError> {
    let mut sources: Vec<Box<dyn TopicSource>> = vec![
        Box::new(RedditSource::new(
            &config.credentials,
            config.request_timeout_secs,
            &config.user_agent,
        )?),
        Box::new(XTrendsSource::new(
            &config.credentials,
            config.request_timeout_secs,
            &config.user_agent,
        )?),
    ];

    for target in targets {
        sources.push(Box::new(HtmlTopicSource::new(
            target.clone(),
            config.request_timeout_secs,
            &config.user_agent,
        )?));
    }

    Ok(sources)
}
