// bountywatch: announce the top new Replit bounty to Slack, once per bounty.
//
// This is the library root. Each module corresponds to one stage of the
// fetch -> extract -> select -> dedup -> notify pipeline.

pub mod bounty;
pub mod config;
pub mod dedup;
pub mod extract;
pub mod notify;
pub mod output;
pub mod pipeline;
pub mod scrape;
pub mod select;
pub mod status;

#[cfg(feature = "web")]
pub mod web;
