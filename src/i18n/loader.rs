//! Translation loader
//!
//! Fetches the translation table from a file, an HTTP endpoint or an inline
//! string, and merges the built-in defaults the page expects.

use std::path::PathBuf;
use std::time::Duration;

use tokio::fs;
use tracing::{debug, info};
use url::Url;
use crate::utils::errors::{FolioError, Result};
use super::table::TranslationTable;

/// Loader captions every language gets when the resource omits them
const BUILTIN_DEFAULTS: &[(&str, &str, &str)] = &[
    ("en", "loader.loading", "Loading"),
    ("vi", "loader.loading", "Đang tải"),
];

/// Where the translation table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationSource {
    File(PathBuf),
    Http(Url),
    Inline(String),
}

impl TranslationSource {
    /// Interpret a configured location: `http(s)://` URLs are fetched, anything else is a path
    pub fn from_location(location: &str) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(Url::parse(location)?))
        } else if location.is_empty() {
            Err(FolioError::Config("Translation resource location is empty".to_string()))
        } else {
            Ok(Self::File(PathBuf::from(location)))
        }
    }

    /// Human-readable location for logs
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Http(url) => url.to_string(),
            Self::Inline(_) => "<inline>".to_string(),
        }
    }

    /// Fetch the raw resource text
    pub async fn fetch(&self, timeout: Duration) -> Result<String> {
        match self {
            Self::File(path) => {
                let read = tokio::time::timeout(timeout, fs::read_to_string(path))
                    .await
                    .map_err(|_| FolioError::Timeout { seconds: timeout.as_secs() })?;
                Ok(read?)
            }
            Self::Http(url) => {
                let client = reqwest::Client::builder().timeout(timeout).build()?;
                let response = client.get(url.clone()).send().await.map_err(|e| {
                    if e.is_timeout() {
                        FolioError::Timeout { seconds: timeout.as_secs() }
                    } else {
                        FolioError::Http(e)
                    }
                })?;
                let response = response.error_for_status().map_err(|e| {
                    FolioError::Resource(format!("{} answered {}", url, e.status().map_or_else(|| "an error".to_string(), |s| s.to_string())))
                })?;
                Ok(response.text().await?)
            }
            Self::Inline(content) => Ok(content.clone()),
        }
    }
}

/// Fetch, parse and complete the translation table
pub async fn load_table(source: &TranslationSource, timeout: Duration) -> Result<TranslationTable> {
    debug!(resource = %source.describe(), "Fetching translation table");
    let content = source.fetch(timeout).await?;
    let mut table = TranslationTable::from_json(&content)?;

    let merged = apply_builtin_defaults(&mut table);
    info!(
        resource = %source.describe(),
        languages = ?table.languages(),
        defaults_merged = merged,
        "Translation table loaded"
    );

    Ok(table)
}

/// Merge built-in defaults into languages lacking them; returns how many were added
pub fn apply_builtin_defaults(table: &mut TranslationTable) -> usize {
    let mut merged = 0;
    for (lang, key, value) in BUILTIN_DEFAULTS {
        if table.insert_default(lang, key, value) {
            merged += 1;
        }
    }
    merged
}
