// Bounty data model — the record type that flows from the extractor through
// selection, dedup, and notification.
//
// Records are rebuilt from scratch on every scrape. Only the `link` of a
// bounty that actually gets announced outlives a run (via the dedup store).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bounty listing as seen at scrape time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BountyRecord {
    pub title: String,
    /// Listing URL. Doubles as the dedup key.
    pub link: String,
    /// Reward in dollars, if a price line was seen before the title closed.
    pub price: Option<f64>,
    /// Absolute time derived from the listing's "N units ago" phrase.
    pub posted_time: Option<DateTime<Utc>>,
    /// Text gathered from the lines following the title heading.
    pub description: String,
}

impl BountyRecord {
    /// Price formatted for display: whole dollars without cents.
    pub fn price_label(&self) -> String {
        match self.price {
            Some(p) if p.fract() == 0.0 => format!("${p:.0}"),
            Some(p) => format!("${p:.2}"),
            None => "unpriced".to_string(),
        }
    }
}
