use crate::app_config::{AppConfig, Credentials};
use crate::ConfigError;

pub const DEFAULT_SUMMARY_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_SUMMARY_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_USER_AGENT: &str = "trendpost/0.1 (tech-trends)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank secrets are treated the same as missing ones.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    // First non-blank name wins; the unprefixed names are older `.env` keys.
    let first_of = |vars: &[&str]| -> Option<String> { vars.iter().find_map(|v| optional(*v)) };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("TRENDPOST_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("TRENDPOST_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRENDPOST_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("TRENDPOST_USER_AGENT", DEFAULT_USER_AGENT);
    let sources_path = PathBuf::from(or_default(
        "TRENDPOST_SOURCES_PATH",
        "./config/sources.yaml",
    ));
    let summary_model = or_default("TRENDPOST_SUMMARY_MODEL", DEFAULT_SUMMARY_MODEL);
    let summary_base_url = or_default("TRENDPOST_SUMMARY_BASE_URL", DEFAULT_SUMMARY_BASE_URL);

    let credentials = Credentials {
        reddit_client_id: first_of(&["REDDIT_CLIENT_ID", "client_id"]),
        reddit_client_secret: first_of(&["REDDIT_CLIENT_SECRET", "client_secret"]),
        reddit_user_agent: first_of(&["REDDIT_USER_AGENT", "user_agent"]),
        x_bearer_token: first_of(&["X_BEARER_TOKEN", "X_TOKEN"]),
        hf_api_token: optional("HF_API_TOKEN"),
    };

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        sources_path,
        summary_model,
        summary_base_url,
        credentials,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
