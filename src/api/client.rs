//! Resource Fetch Client
//!
//! Issues the one `GET /api/list` request of a list view and reports a
//! typed result.

use crate::model::Resource;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use url::Url;

/// Path of the inventory listing, relative to the configured endpoint
pub const LIST_PATH: &str = "api/list";

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Truncate a response body and strip control characters for logging
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Why a fetch produced no collection
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status}")]
    Status { status: StatusCode },

    #[error("response is not a resource list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Completion of a spawned fetch, tagged with the list view mount it belongs to
#[derive(Debug)]
pub struct FetchEvent {
    pub generation: u64,
    pub result: std::result::Result<Vec<Resource>, FetchError>,
}

/// HTTP client for the inventory backend
#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
    list_url: Url,
}

impl ResourceClient {
    /// Create a client for the backend rooted at `endpoint`
    pub fn new(endpoint: &Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("cloudpile/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            list_url: list_url(endpoint)?,
        })
    }

    pub fn list_url(&self) -> &Url {
        &self.list_url
    }

    /// Fetch the full resource collection, exactly as the backend returns it
    pub async fn fetch_resources(&self) -> std::result::Result<Vec<Resource>, FetchError> {
        tracing::debug!("GET {}", self.list_url);

        let response = self
            .client
            .get(self.list_url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.list_url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.list_url.to_string(),
                source,
            })?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(FetchError::Status { status });
        }

        let resources: Vec<Resource> = serde_json::from_str(&body)?;
        tracing::info!("Fetched {} resources", resources.len());
        Ok(resources)
    }
}

/// Join the list path onto the endpoint, keeping any path prefix it carries
fn list_url(endpoint: &Url) -> Result<Url> {
    let mut base = endpoint.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(LIST_PATH)
        .with_context(|| format!("Invalid endpoint: {}", endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_from_root() {
        let endpoint = Url::parse("http://127.0.0.1:3000").unwrap();
        assert_eq!(
            list_url(&endpoint).unwrap().as_str(),
            "http://127.0.0.1:3000/api/list"
        );
    }

    #[test]
    fn test_list_url_keeps_prefix() {
        let endpoint = Url::parse("https://inventory.example.com/cloudpile").unwrap();
        assert_eq!(
            list_url(&endpoint).unwrap().as_str(),
            "https://inventory.example.com/cloudpile/api/list"
        );

        let endpoint = Url::parse("https://inventory.example.com/cloudpile/").unwrap();
        assert_eq!(
            list_url(&endpoint).unwrap().as_str(),
            "https://inventory.example.com/cloudpile/api/list"
        );
    }

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(sanitized.contains("500 bytes total"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("bad\ngateway\t!"), "badgateway!");
    }
}
