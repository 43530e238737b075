//! Reddit hot-listing source (client-credentials OAuth).

use async_trait::async_trait;
use serde::Deserialize;
use trendpost_core::{Credentials, Topic};

use super::{build_http_client, read_json};
use crate::error::SourceError;
use crate::source::TopicSource;
use crate::MAX_TOPICS_PER_SOURCE;

const DEFAULT_AUTH_BASE_URL: &str = "https://www.reddit.com";
const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";
const SUBREDDIT: &str = "technology";
const SOURCE_NAME: &str = "reddit";

/// Reddit OAuth token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    title: Option<String>,
}

/// Titles of the current hot posts in `r/technology`.
pub struct RedditSource {
    client: reqwest::Client,
    client_id: Option<String>,
    client_secret: Option<String>,
    user_agent: Option<String>,
    auth_base_url: String,
    api_base_url: String,
}

impl RedditSource {
    /// Creates a source pointed at the production Reddit hosts.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(
        credentials: &Credentials,
        timeout_secs: u64,
        default_user_agent: &str,
    ) -> Result<Self, SourceError> {
        Self::with_base_urls(
            credentials,
            timeout_secs,
            default_user_agent,
            DEFAULT_AUTH_BASE_URL,
            DEFAULT_API_BASE_URL,
        )
    }

    /// Creates a source with custom token and API hosts (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn with_base_urls(
        credentials: &Credentials,
        timeout_secs: u64,
        default_user_agent: &str,
        auth_base_url: &str,
        api_base_url: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_http_client(timeout_secs, default_user_agent)?,
            client_id: credentials.reddit_client_id.clone(),
            client_secret: credentials.reddit_client_secret.clone(),
            user_agent: credentials.reddit_user_agent.clone(),
            auth_base_url: auth_base_url.trim_end_matches('/').to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_token(
        &self,
        client_id: &str,
        client_secret: &str,
        user_agent: &str,
    ) -> Result<String, SourceError> {
        let response = self
            .client
            .post(format!("{}/api/v1/access_token", self.auth_base_url))
            .header(reqwest::header::USER_AGENT, user_agent)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Auth {
                service: "reddit",
                status: response.status().as_u16(),
            });
        }

        let token: TokenResponse = read_json(response, "reddit access_token").await?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl TopicSource for RedditSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch(&self) -> Result<Vec<Topic>, SourceError> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or(SourceError::MissingCredential("REDDIT_CLIENT_ID"))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or(SourceError::MissingCredential("REDDIT_CLIENT_SECRET"))?;
        let user_agent = self
            .user_agent
            .as_deref()
            .ok_or(SourceError::MissingCredential("REDDIT_USER_AGENT"))?;

        let token = self
            .fetch_token(client_id, client_secret, user_agent)
            .await?;

        let response = self
            .client
            .get(format!("{}/r/{SUBREDDIT}/hot", self.api_base_url))
            .bearer_auth(&token)
            .header(reqwest::header::USER_AGENT, user_agent)
            .query(&[("limit", MAX_TOPICS_PER_SOURCE.to_string())])
            .send()
            .await?;

        let listing: Listing = read_json(response, "reddit hot listing").await?;
        Ok(titles_from_listing(listing))
    }
}

fn titles_from_listing(listing: Listing) -> Vec<Topic> {
    listing
        .data
        .children
        .into_iter()
        .take(MAX_TOPICS_PER_SOURCE)
        .map(|post| {
            let title = post.data.title.as_deref().unwrap_or_default();
            Topic::new(title.trim(), SOURCE_NAME)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(titles: &[Option<&str>]) -> Listing {
        let children: Vec<serde_json::Value> = titles
            .iter()
            .map(|t| serde_json::json!({ "kind": "t3", "data": { "title": t } }))
            .collect();
        serde_json::from_value(serde_json::json!({ "data": { "children": children } }))
            .expect("valid listing")
    }

    #[test]
    fn caps_at_five_titles() {
        let titles: Vec<Option<&str>> = ["1", "2", "3", "4", "5", "6", "7"]
            .iter()
            .map(|t| Some(*t))
            .collect();
        let topics = titles_from_listing(listing(&titles));
        assert_eq!(topics.len(), 5);
        assert_eq!(topics[4].text, "5");
    }

    #[test]
    fn blank_and_missing_titles_keep_their_position() {
        let topics = titles_from_listing(listing(&[
            Some("  Linux 7.0  "),
            None,
            Some("   "),
            Some("4"),
            Some("5"),
            Some("6"),
        ]));
        let texts: Vec<&str> = topics.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Linux 7.0", "", "", "4", "5"]);
        assert_eq!(topics[0].source, "reddit");
    }

    #[tokio::test]
    async fn missing_credentials_fail_without_network() {
        let source = RedditSource::with_base_urls(
            &Credentials::default(),
            5,
            "trendpost-test/0.1",
            "http://127.0.0.1:1",
            "http://127.0.0.1:1",
        )
        .unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredential("REDDIT_CLIENT_ID")));
    }
}
