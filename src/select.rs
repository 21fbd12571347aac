// Top-bounty selection.
//
// The notifier only ever announces one bounty per run, so selection narrows
// the extracted list to the highest-paying listings. Ties are all returned
// so the dedup step can skip past ones that were already announced.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use crate::bounty::BountyRecord;

/// Return every bounty tied at the maximum price, in their original order.
///
/// A missing price loses to any present price. When no bounty has a price
/// at all, every bounty is tied and the whole list comes back.
pub fn top_bounties(bounties: &[BountyRecord]) -> Vec<BountyRecord> {
    if bounties.is_empty() {
        warn!("No bounties found");
        return Vec::new();
    }

    let max_price = bounties
        .iter()
        .filter_map(|b| b.price)
        .fold(None, |max: Option<f64>, p| Some(max.map_or(p, |m| m.max(p))));

    let top: Vec<BountyRecord> = bounties
        .iter()
        .filter(|b| b.price == max_price)
        .cloned()
        .collect();

    info!(count = top.len(), max_price = ?max_price, "Found top bounties");
    for bounty in &top {
        debug!(title = %bounty.title, link = %bounty.link, "Top bounty candidate");
    }

    top
}

/// Keep bounties posted strictly after `now - window`.
///
/// Bounties without a posted time are dropped. A window reaching past the
/// earliest representable date has no cutoff, so every dated bounty is kept.
pub fn filter_recent(
    bounties: &[BountyRecord],
    now: DateTime<Utc>,
    window: TimeDelta,
) -> Vec<BountyRecord> {
    let cutoff = now.checked_sub_signed(window);
    bounties
        .iter()
        .filter(|b| match (b.posted_time, cutoff) {
            (Some(posted), Some(cutoff)) => posted > cutoff,
            (Some(_), None) => true,
            (None, _) => false,
        })
        .cloned()
        .collect()
}
