//! X (Twitter) trending topics for a fixed place.

use async_trait::async_trait;
use serde::Deserialize;
use trendpost_core::{Credentials, Topic};

use super::{build_http_client, read_json};
use crate::error::SourceError;
use crate::source::TopicSource;
use crate::MAX_TOPICS_PER_SOURCE;

const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com";
/// Yahoo! Where On Earth ID for worldwide trends.
const WORLDWIDE_WOEID: u32 = 1;
const SOURCE_NAME: &str = "x";

#[derive(Debug, Deserialize)]
struct TrendBatch {
    #[serde(default)]
    trends: Vec<Trend>,
}

#[derive(Debug, Deserialize)]
struct Trend {
    name: String,
}

/// Worldwide trend names from the X trends API.
pub struct XTrendsSource {
    client: reqwest::Client,
    bearer_token: Option<String>,
    api_base_url: String,
}

impl XTrendsSource {
    /// Creates a source pointed at the production X API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(
        credentials: &Credentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        Self::with_base_url(credentials, timeout_secs, user_agent, DEFAULT_API_BASE_URL)
    }

    /// Creates a source with a custom API host (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(
        credentials: &Credentials,
        timeout_secs: u64,
        user_agent: &str,
        api_base_url: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            bearer_token: credentials.x_bearer_token.clone(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TopicSource for XTrendsSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<Vec<Topic>, SourceError> {
        let token = self
            .bearer_token
            .as_deref()
            .ok_or(SourceError::MissingCredential("X_BEARER_TOKEN"))?;

        let response = self
            .client
            .get(format!("{}/1.1/trends/place.json", self.api_base_url))
            .bearer_auth(token)
            .query(&[("id", WORLDWIDE_WOEID)])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            return Err(SourceError::Auth {
                service: "x",
                status: response.status().as_u16(),
            });
        }

        let batches: Vec<TrendBatch> = read_json(response, "x trends/place").await?;
        let topics = names_from_first_batch(batches);
        if topics.is_empty() {
            tracing::info!(source = SOURCE_NAME, "no trending data returned");
        }
        Ok(topics)
    }
}

fn names_from_first_batch(batches: Vec<TrendBatch>) -> Vec<Topic> {
    batches
        .into_iter()
        .next()
        .map(|batch| {
            batch
                .trends
                .into_iter()
                .take(MAX_TOPICS_PER_SOURCE)
                .map(|trend| Topic::new(trend.name, SOURCE_NAME))
                .collect()
        })
        .unwrap_or_default()
}
