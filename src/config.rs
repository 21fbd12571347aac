use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::scrape::firecrawl::DEFAULT_FIRECRAWL_API_URL;

/// Page scraped for bounty listings.
pub const DEFAULT_BOUNTIES_PAGE_URL: &str = "https://replit.com/bounties";

/// Default location of the notified-links log.
pub const DEFAULT_SENT_LOG: &str = "sent_bounties.txt";

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;
const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars (never hardcoded). The .env file is loaded
/// at startup via dotenvy. Missing secrets are not errors here: an absent
/// webhook means notifications are skipped, an absent Firecrawl key means
/// the fetch is attempted anyway and rejected upstream.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slack incoming webhook (SLACK_WEBHOOK_URL).
    pub slack_webhook_url: Option<String>,
    /// Firecrawl API key (FIRECRAWL_API_KEY).
    pub firecrawl_api_key: String,
    /// Firecrawl API base URL (FIRECRAWL_API_URL).
    pub firecrawl_api_url: String,
    /// Listing page to scrape (BOUNTIES_PAGE_URL).
    pub bounties_page_url: String,
    /// Append-only log of notified links (BOUNTYWATCH_SENT_LOG).
    pub sent_log_path: PathBuf,
    pub fetch_timeout: Duration,
    pub notify_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slack_webhook_url: None,
            firecrawl_api_key: String::new(),
            firecrawl_api_url: DEFAULT_FIRECRAWL_API_URL.to_string(),
            bounties_page_url: DEFAULT_BOUNTIES_PAGE_URL.to_string(),
            sent_log_path: PathBuf::from(DEFAULT_SENT_LOG),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            notify_timeout: Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            slack_webhook_url: non_empty_var("SLACK_WEBHOOK_URL"),
            firecrawl_api_key: env::var("FIRECRAWL_API_KEY").unwrap_or_default(),
            firecrawl_api_url: non_empty_var("FIRECRAWL_API_URL")
                .unwrap_or(defaults.firecrawl_api_url),
            bounties_page_url: non_empty_var("BOUNTIES_PAGE_URL")
                .unwrap_or(defaults.bounties_page_url),
            sent_log_path: non_empty_var("BOUNTYWATCH_SENT_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.sent_log_path),
            fetch_timeout: secs_var("BOUNTYWATCH_FETCH_TIMEOUT_SECS")?
                .unwrap_or(defaults.fetch_timeout),
            notify_timeout: secs_var("BOUNTYWATCH_NOTIFY_TIMEOUT_SECS")?
                .unwrap_or(defaults.notify_timeout),
        })
    }

    /// Check that the Slack webhook is configured.
    /// Only `check` calls this; a run without a webhook just skips sending.
    pub fn require_webhook(&self) -> Result<()> {
        if self.slack_webhook_url.is_none() {
            anyhow::bail!(
                "SLACK_WEBHOOK_URL not set. Add it to your .env file.\n\
                 Without it, runs still record bounties but nothing is posted."
            );
        }
        Ok(())
    }

    /// Check that the Firecrawl API key is configured.
    pub fn require_firecrawl(&self) -> Result<()> {
        if self.firecrawl_api_key.is_empty() {
            anyhow::bail!(
                "FIRECRAWL_API_KEY not set. Add it to your .env file.\n\
                 Without it, every fetch is rejected and no bounties are found."
            );
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn secs_var(name: &str) -> Result<Option<Duration>> {
    match non_empty_var(name) {
        Some(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("{name} must be a whole number of seconds, got {raw:?}"))?;
            if secs == 0 {
                anyhow::bail!("{name} must be greater than zero");
            }
            Ok(Some(Duration::from_secs(secs)))
        }
        None => Ok(None),
    }
}
