// Bounty page markdown -> BountyRecord extraction.
//
// The scraped page is loosely structured markdown. A listing looks roughly
// like this, although the order of the price and age lines varies:
//
//   - $250
//   3 hours ago
//   ### [Build a Discord bot](https://replit.com/bounties/@alice/discord-bot)
//   [alice](https://replit.com/@alice)
//   Need a bot that posts standup reminders...
//   due Nov 2
//
// The scan is a single forward pass driven by a two-state machine:
//
//   ScanningForTitle --title--> AccumulatingDescription
//   AccumulatingDescription --title--> (emit draft) AccumulatingDescription
//   AccumulatingDescription --window exhausted--> (emit draft) ScanningForTitle
//
// Price and age lines are tracked on every line regardless of state and stick
// to whichever title opens next, including ones seen inside the previous
// listing's description window.

use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};
use regex_lite::Regex;
use tracing::debug;

use super::time::parse_posted_time;
use crate::bounty::BountyRecord;

/// Lines examined after a title heading when building its description.
pub const DEFAULT_LOOKAHEAD_LINES: usize = 14;

/// Listings older than this are dropped during extraction.
pub const DEFAULT_RECENCY_HOURS: i64 = 24;

static PRICE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \$([0-9,.]+)").expect("valid price regex"));

static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^### \[(.*?)\]\((.*?)\)").expect("valid title regex"));

static DUE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"due\s+(.*)$").expect("valid due regex"));

static PROFILE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*?)\]\(https://replit\.com/@.*\)").expect("valid profile regex")
});

/// Configurable markdown extractor. `Default` matches the live page layout.
#[derive(Debug, Clone)]
pub struct BountyExtractor {
    /// Maximum number of lines after a title that feed its description.
    pub lookahead_lines: usize,
    /// Maximum age of a listing, measured from the extraction time.
    pub recency_window: TimeDelta,
}

impl Default for BountyExtractor {
    fn default() -> Self {
        Self {
            lookahead_lines: DEFAULT_LOOKAHEAD_LINES,
            recency_window: TimeDelta::hours(DEFAULT_RECENCY_HOURS),
        }
    }
}

/// Extract recent bounties from `markdown` using the default extractor.
pub fn extract_bounties(markdown: &str, now: DateTime<Utc>) -> Vec<BountyRecord> {
    BountyExtractor::default().extract(markdown, now)
}

/// Price and age seen since the last title heading.
#[derive(Debug, Default)]
struct Pending {
    price: Option<f64>,
    posted_time: Option<DateTime<Utc>>,
}

impl Pending {
    fn observe(&mut self, line: &str, now: DateTime<Utc>) {
        if let Some(price) = parse_price(line) {
            self.price = Some(price);
        }
        if line.contains("ago") {
            if let Some(posted) = parse_posted_time(line, now) {
                self.posted_time = Some(posted);
            }
        }
    }
}

/// A listing whose title has been seen but whose description is still open.
#[derive(Debug)]
struct Draft {
    title: String,
    link: String,
    price: Option<f64>,
    posted_time: Option<DateTime<Utc>>,
    lines: Vec<String>,
    due: Option<String>,
    poster: Option<String>,
}

impl Draft {
    fn open(title: String, link: String, pending: &mut Pending) -> Self {
        Self {
            title,
            link,
            price: pending.price.take(),
            posted_time: pending.posted_time.take(),
            lines: Vec::new(),
            due: None,
            poster: None,
        }
    }

    fn absorb(&mut self, line: &str) {
        if line.contains("due") {
            if let Some(caps) = DUE_FRAGMENT.captures(line) {
                self.due = Some(caps[1].trim().to_string());
            }
        }
        if let Some(caps) = PROFILE_LINK.captures(line) {
            self.poster = Some(caps[1].to_string());
        }
        self.lines.push(line.to_string());
    }
}

enum ScanState {
    ScanningForTitle,
    AccumulatingDescription { draft: Draft, remaining: usize },
}

impl BountyExtractor {
    /// Scan `markdown` and return the listings posted within the recency
    /// window, in document order.
    pub fn extract(&self, markdown: &str, now: DateTime<Utc>) -> Vec<BountyRecord> {
        let mut pending = Pending::default();
        let mut state = ScanState::ScanningForTitle;
        let mut records = Vec::new();

        for raw in markdown.lines() {
            let line = raw.trim();
            pending.observe(line, now);
            state = self.step(state, line, &mut pending, now, &mut records);
        }

        if let ScanState::AccumulatingDescription { draft, .. } = state {
            self.finalize(draft, now, &mut records);
        }

        debug!(count = records.len(), "Extracted recent bounties");
        records
    }

    fn step(
        &self,
        state: ScanState,
        line: &str,
        pending: &mut Pending,
        now: DateTime<Utc>,
        records: &mut Vec<BountyRecord>,
    ) -> ScanState {
        if let Some((title, link)) = parse_title(line) {
            if let ScanState::AccumulatingDescription { draft, .. } = state {
                self.finalize(draft, now, records);
            }
            let draft = Draft::open(title, link, pending);
            if self.lookahead_lines == 0 {
                self.finalize(draft, now, records);
                return ScanState::ScanningForTitle;
            }
            return ScanState::AccumulatingDescription {
                draft,
                remaining: self.lookahead_lines,
            };
        }

        match state {
            ScanState::ScanningForTitle => ScanState::ScanningForTitle,
            ScanState::AccumulatingDescription {
                mut draft,
                remaining,
            } => {
                draft.absorb(line);
                if remaining <= 1 {
                    self.finalize(draft, now, records);
                    ScanState::ScanningForTitle
                } else {
                    ScanState::AccumulatingDescription {
                        draft,
                        remaining: remaining - 1,
                    }
                }
            }
        }
    }

    fn finalize(&self, draft: Draft, now: DateTime<Utc>, records: &mut Vec<BountyRecord>) {
        // The link is the sent-log key and must fit on one log line.
        if draft.link.chars().any(char::is_control) {
            debug!(title = %draft.title, link = ?draft.link, "Skipping bounty with a malformed link");
            return;
        }

        let is_recent = draft
            .posted_time
            .is_some_and(|posted| now - posted <= self.recency_window);

        if draft.title.is_empty() || !is_recent {
            debug!(
                title = %draft.title,
                link = %draft.link,
                posted_time = ?draft.posted_time,
                "Skipping bounty without a recent posted time"
            );
            return;
        }

        debug!(
            title = %draft.title,
            price = ?draft.price,
            due = ?draft.due,
            poster = ?draft.poster,
            "Parsed bounty"
        );

        let description = draft.lines.join(" ").trim().to_string();
        records.push(BountyRecord {
            title: draft.title,
            link: draft.link,
            price: draft.price,
            posted_time: draft.posted_time,
            description,
        });
    }
}

/// Parse a `- $1,250.00` style price line.
fn parse_price(line: &str) -> Option<f64> {
    let caps = PRICE_LINE.captures(line)?;
    caps[1].replace(',', "").parse::<f64>().ok()
}

/// Parse a `### [title](link)` heading into its title and link.
fn parse_title(line: &str) -> Option<(String, String)> {
    let caps = TITLE_LINE.captures(line)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}
