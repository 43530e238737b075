use std::path::PathBuf;

/// Secrets for the upstream APIs. Every field is optional at load time; a
/// fetcher whose credential is absent fails when it is called.
#[derive(Clone, Default)]
pub struct Credentials {
    pub reddit_client_id: Option<String>,
    pub reddit_client_secret: Option<String>,
    pub reddit_user_agent: Option<String>,
    pub x_bearer_token: Option<String>,
    pub hf_api_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[redacted]");
        f.debug_struct("Credentials")
            .field("reddit_client_id", &redact(&self.reddit_client_id))
            .field("reddit_client_secret", &redact(&self.reddit_client_secret))
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("x_bearer_token", &redact(&self.x_bearer_token))
            .field("hf_api_token", &redact(&self.hf_api_token))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub sources_path: PathBuf,
    pub summary_model: String,
    pub summary_base_url: String,
    pub credentials: Credentials,
}
