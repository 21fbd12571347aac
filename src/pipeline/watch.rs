// BountyWatch — fetch, extract, select, dedup, notify.
//
// One call to `run` performs at most one notification and at most one dedup
// write. The link is recorded even when delivery fails, so a bounty is
// announced at most once and a failed Slack post is never retried.
//
// Runs are serialized within a process by `run_lock`, which covers the
// dedup read and the following record. Separate processes sharing one
// sent log are not coordinated.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::bounty::BountyRecord;
use crate::config::Config;
use crate::dedup::{DedupStore, FileDedupStore};
use crate::extract::BountyExtractor;
use crate::notify::{Delivery, Notifier, SlackNotifier};
use crate::scrape::{BountySource, FirecrawlClient};
use crate::select::top_bounties;

/// Result of one orchestration run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Every top bounty was already announced, or none were found.
    NoNewBounty,
    /// `bounty` was handed to the notifier and recorded as sent.
    Sent {
        bounty: BountyRecord,
        delivery: Delivery,
    },
}

impl RunOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RunOutcome::NoNewBounty => "No new bounties found in the last 24 hours.",
            RunOutcome::Sent { .. } => "Sent top bounty to Slack.",
        }
    }

    /// JSON body returned by the trigger endpoint and `run --json`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            RunOutcome::NoNewBounty => json!({ "message": self.message() }),
            RunOutcome::Sent { bounty, delivery } => json!({
                "message": self.message(),
                "bounty": bounty,
                "delivery": delivery,
            }),
        }
    }
}

pub struct BountyWatch {
    source: Arc<dyn BountySource>,
    notifier: Arc<dyn Notifier>,
    dedup: Arc<dyn DedupStore>,
    extractor: BountyExtractor,
    run_lock: Mutex<()>,
}

impl BountyWatch {
    pub fn new(
        source: Arc<dyn BountySource>,
        notifier: Arc<dyn Notifier>,
        dedup: Arc<dyn DedupStore>,
    ) -> Self {
        Self {
            source,
            notifier,
            dedup,
            extractor: BountyExtractor::default(),
            run_lock: Mutex::new(()),
        }
    }

    /// Wire up the production collaborators: Firecrawl, Slack, and the
    /// flat-file sent log.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = FirecrawlClient::new(
            &config.firecrawl_api_url,
            &config.firecrawl_api_key,
            &config.bounties_page_url,
            config.fetch_timeout,
        )?;
        Self::from_config_with_source(config, Arc::new(source))
    }

    /// Like `from_config`, but reading the listing from `source` instead of
    /// Firecrawl. Used to replay a saved page.
    pub fn from_config_with_source(
        config: &Config,
        source: Arc<dyn BountySource>,
    ) -> Result<Self> {
        let notifier = SlackNotifier::new(config.slack_webhook_url.clone(), config.notify_timeout)?;
        let dedup = FileDedupStore::new(config.sent_log_path.clone());
        Ok(Self::new(source, Arc::new(notifier), Arc::new(dedup)))
    }

    pub fn with_extractor(mut self, extractor: BountyExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Fetch and extract, treating `now` as the extraction time.
    ///
    /// A failed fetch (timeout, transport, bad response) yields an empty list.
    pub async fn bounties_at(&self, now: DateTime<Utc>) -> Vec<BountyRecord> {
        let markdown = match self.source.fetch_markdown().await {
            Ok(markdown) => markdown,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Bounty fetch failed, treating as no bounties");
                return Vec::new();
            }
        };

        let bounties = self.extractor.extract(&markdown, now);
        info!(count = bounties.len(), "Parsed bounties");
        bounties
    }

    /// Run once against the current time.
    pub async fn run(&self) -> Result<RunOutcome> {
        self.run_at(Utc::now()).await
    }

    /// Run once, treating `now` as the extraction time.
    ///
    /// Only dedup store I/O errors are returned; fetch and notify problems
    /// are logged and absorbed.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunOutcome> {
        let _guard = self.run_lock.lock().await;

        let bounties = self.bounties_at(now).await;
        let top = top_bounties(&bounties);

        let sent = self.dedup.read().await.context("Failed to read sent links")?;
        let Some(bounty) = top.into_iter().find(|b| !sent.contains(&b.link)) else {
            info!("No new bounties to announce");
            return Ok(RunOutcome::NoNewBounty);
        };

        let delivery = self.notifier.send(&bounty).await;
        if !delivery.is_delivered() {
            warn!(
                link = %bounty.link,
                delivery = ?delivery,
                "Bounty not delivered, recording as sent anyway"
            );
        }

        self.dedup
            .record(&bounty.link)
            .await
            .context("Failed to record sent link")?;

        info!(title = %bounty.title, link = %bounty.link, "Announced top bounty");
        Ok(RunOutcome::Sent { bounty, delivery })
    }
}
