// Slack incoming-webhook notifier.
//
// Posts `{"text": ...}` to the configured webhook. Slack answers 200 with a
// plain "ok" body on success; anything else is reported as a failed delivery
// along with the response body, which usually names the problem
// ("invalid_payload", "no_service", ...).

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::traits::{format_message, Delivery, Notifier};
use crate::bounty::BountyRecord;

pub struct SlackNotifier {
    client: Client,
    webhook_url: Option<String>,
}

#[derive(Serialize)]
struct SlackMessage<'a> {
    text: &'a str,
}

impl SlackNotifier {
    /// Create a notifier. `None` (or an empty URL) disables sending.
    pub fn new(webhook_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            webhook_url: webhook_url.filter(|url| !url.is_empty()),
        })
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn send(&self, bounty: &BountyRecord) -> Delivery {
        let Some(url) = self.webhook_url.as_deref() else {
            warn!("Slack webhook not configured");
            return Delivery::Skipped {
                reason: "Slack webhook not configured".to_string(),
            };
        };

        debug!(title = %bounty.title, link = %bounty.link, "Sending to Slack");

        let text = format_message(bounty);
        let response = match self
            .client
            .post(url)
            .json(&SlackMessage { text: &text })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Slack request failed");
                return Delivery::Failed {
                    reason: format!("request failed: {e}"),
                };
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            info!(title = %bounty.title, "Slack sent");
            return Delivery::Delivered;
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "Slack error");
        Delivery::Failed {
            reason: format!("Slack returned {status}: {body}"),
        }
    }
}
