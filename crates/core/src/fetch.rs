//! Page fetching from URLs, files, and stdin.
//!
//! These are the collaborators that feed [`extract`](crate::extract): they do
//! all of the I/O, so extraction itself stays synchronous and infallible.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{LinkbriefError, Result};

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: concat!("Mozilla/5.0 (compatible; Linkbrief/", env!("CARGO_PKG_VERSION"), ")").to_string(),
        }
    }
}

/// A decoded page body and the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub html: String,
    /// URL after redirects; use this as the extraction source URL.
    pub final_url: String,
}

/// Fetches HTML content from a URL.
///
/// Redirects are followed and the body is decoded using the response charset.
/// Non-success statuses are reported as [`LinkbriefError::HttpStatus`].
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<FetchedPage> {
    let parsed_url = Url::parse(url).map_err(|e| LinkbriefError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(LinkbriefError::InvalidUrl(
            "URL must use http:// or https://".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(LinkbriefError::HttpError)?;

    tracing::debug!(url = %parsed_url, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                LinkbriefError::Timeout { timeout: config.timeout }
            } else {
                LinkbriefError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "upstream returned an error status");
        return Err(LinkbriefError::HttpStatus { status: status.as_u16() });
    }

    let final_url = response.url().to_string();
    let html = response.text().await?;

    Ok(FetchedPage { html, final_url })
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(LinkbriefError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(LinkbriefError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(LinkbriefError::from)?;

    Ok(buffer)
}
