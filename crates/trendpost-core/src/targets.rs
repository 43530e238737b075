//! HTML scrape targets: which page to fetch and which elements hold topic text.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeTarget {
    /// Short source name used in logs (`techcrunch`, `medium`).
    pub name: String,
    pub url: String,
    /// CSS selector matching the elements whose text becomes a topic.
    pub selector: String,
}

#[derive(Debug, Deserialize)]
pub struct TargetsFile {
    pub scrapers: Vec<ScrapeTarget>,
}

/// Built-in targets: TechCrunch headlines, then Medium technology titles.
#[must_use]
pub fn default_scrape_targets() -> Vec<ScrapeTarget> {
    vec![
        ScrapeTarget {
            name: "techcrunch".to_string(),
            url: "https://techcrunch.com/".to_string(),
            selector: "h2.post-block__title".to_string(),
        },
        ScrapeTarget {
            name: "medium".to_string(),
            url: "https://medium.com/topic/technology".to_string(),
            selector: "h2".to_string(),
        },
    ]
}

/// Load scrape targets from a YAML file, falling back to
/// [`default_scrape_targets`] when the file does not exist.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, parsed, or
/// fails validation.
pub fn load_scrape_targets(path: &Path) -> Result<Vec<ScrapeTarget>, ConfigError> {
    if !path.exists() {
        return Ok(default_scrape_targets());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TargetsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let targets_file: TargetsFile = serde_yaml::from_str(&content)?;
    validate_targets(&targets_file.scrapers)?;

    Ok(targets_file.scrapers)
}

fn validate_targets(targets: &[ScrapeTarget]) -> Result<(), ConfigError> {
    if targets.is_empty() {
        return Err(ConfigError::Validation(
            "at least one scraper must be configured".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    for target in targets {
        if target.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "scraper name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(target.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate scraper name: '{}'",
                target.name
            )));
        }

        if !(target.url.starts_with("http://") || target.url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "scraper '{}' has invalid url '{}'; must start with http:// or https://",
                target.name, target.url
            )));
        }

        if let Err(e) = scraper::Selector::parse(&target.selector) {
            return Err(ConfigError::Validation(format!(
                "scraper '{}' has invalid selector '{}': {e}",
                target.name, target.selector
            )));
        }
    }

    Ok(())
}
