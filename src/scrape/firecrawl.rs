// Firecrawl /v1/scrape client.
//
// One POST per fetch, bearer-token auth, bounded by the configured timeout.
// Errors are returned as-is; the orchestrator decides that a failed fetch
// means "no bounties this run".
//
// API docs: https://docs.firecrawl.dev/api-reference/endpoint/scrape

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::traits::BountySource;

/// Default Firecrawl API base URL.
pub const DEFAULT_FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev";

/// Milliseconds Firecrawl waits for the page's client-side rendering.
const WAIT_FOR_MS: u64 = 2000;

pub struct FirecrawlClient {
    client: Client,
    api_url: String,
    api_key: String,
    target_url: String,
}

impl FirecrawlClient {
    /// Create a client that scrapes `target_url`. An empty `api_key` is
    /// still sent; Firecrawl rejects it and the fetch fails like any other.
    pub fn new(api_url: &str, api_key: &str, target_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            target_url: target_url.to_string(),
        })
    }
}

#[async_trait]
impl BountySource for FirecrawlClient {
    async fn fetch_markdown(&self) -> Result<String> {
        info!(target_url = %self.target_url, "Fetching bounties via Firecrawl /scrape API");

        let url = format!("{}/v1/scrape", self.api_url);
        let request = ScrapeRequest {
            url: &self.target_url,
            formats: &["markdown"],
            only_main_content: false,
            wait_for: WAIT_FOR_MS,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Firecrawl API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Firecrawl API returned {}: {}", status, body);
        }

        let body: ScrapeResponse = response
            .json()
            .await
            .context("Failed to parse Firecrawl response")?;

        let markdown = body.data.markdown.unwrap_or_default();
        debug!(bytes = markdown.len(), "Received scraped markdown");
        Ok(markdown)
    }
}

// --- Firecrawl API request/response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: &'a [&'a str],
    only_main_content: bool,
    wait_for: u64,
}

/// Response envelope from `/v1/scrape`. Only the markdown is used.
#[derive(Debug, Deserialize)]
pub struct ScrapeResponse {
    pub data: ScrapeData,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeData {
    pub markdown: Option<String>,
}
