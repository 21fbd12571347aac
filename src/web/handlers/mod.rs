pub mod bounties;
pub mod scrape;
