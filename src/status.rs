// System status display — configuration presence and sent-log stats.

use anyhow::Result;

use crate::config::Config;
use crate::dedup::{DedupStore, FileDedupStore};

/// Display system status to the terminal.
pub async fn show(config: &Config) -> Result<()> {
    println!("Bounty page: {}", config.bounties_page_url);
    println!(
        "Firecrawl: {} ({})",
        config.firecrawl_api_url,
        if config.firecrawl_api_key.is_empty() {
            "no API key"
        } else {
            "API key set"
        }
    );
    println!(
        "Slack webhook: {}",
        if config.slack_webhook_url.is_some() {
            "configured"
        } else {
            "not configured (notifications will be skipped)"
        }
    );
    println!(
        "Timeouts: fetch {}s, notify {}s",
        config.fetch_timeout.as_secs(),
        config.notify_timeout.as_secs()
    );

    let path = &config.sent_log_path;
    if !path.exists() {
        println!("Sent log: {} (not created yet)", path.display());
        return Ok(());
    }

    let file_size = std::fs::metadata(path)
        .map(|m| log_size_label(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    let store = FileDedupStore::new(path.clone());
    let links = store.read().await?;
    println!(
        "Sent log: {} ({}, {} bounties announced)",
        path.display(),
        file_size,
        links.len()
    );

    Ok(())
}

/// Human-readable size of the sent log. The log only ever holds one short
/// link per line, so kilobytes are the largest unit worth showing.
fn log_size_label(bytes: u64) -> String {
    match bytes {
        0 => "empty".to_string(),
        1..=1023 => format!("{bytes} B"),
        _ => format!("{:.1} KB", bytes as f64 / 1024.0),
    }
}
