//! Hugging Face Inference API client for summarization models.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use trendpost_core::AppConfig;

use crate::error::SummarizeError;
use crate::summarizer::Summarizer;

/// Summarizer backed by a hosted Hugging Face model.
pub struct HuggingFaceSummarizer {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: SummarizeParameters,
}

#[derive(Serialize)]
struct SummarizeParameters {
    min_length: u32,
    max_length: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummaryItem {
    summary_text: String,
}

impl HuggingFaceSummarizer {
    /// Build a summarizer from the model, host, token and timeout in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizeError> {
        Self::with_base_url(
            &config.summary_base_url,
            &config.summary_model,
            config.credentials.hf_api_token.clone(),
            config.request_timeout_secs,
        )
    }

    /// Build a summarizer against an explicit inference host (wiremock in tests).
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: &str,
        model: &str,
        api_token: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/models/{model}", base_url.trim_end_matches('/')),
            api_token,
        })
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(
        &self,
        prompt: &str,
        min_length: u32,
        max_length: u32,
    ) -> Result<String, SummarizeError> {
        let request = SummarizeRequest {
            inputs: prompt,
            parameters: SummarizeParameters {
                min_length,
                max_length,
                do_sample: false,
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let items: Vec<SummaryItem> = serde_json::from_str(&body)?;
        let text = items
            .into_iter()
            .next()
            .ok_or(SummarizeError::EmptyResponse)?
            .summary_text;

        if text.trim().is_empty() {
            return Err(SummarizeError::BlankSummary);
        }
        Ok(text)
    }
}
