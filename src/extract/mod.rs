// Markdown extraction — turns the scraped bounty page into BountyRecords.
//
// `time` handles the "3 hours ago" phrases; `markdown` walks the document
// line by line and assembles records from headings, price lines, and the
// bounded window of lines under each heading.

pub mod markdown;
pub mod time;

pub use markdown::{extract_bounties, BountyExtractor};
pub use time::parse_posted_time;
