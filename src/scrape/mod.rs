// Page scraping — fetching the bounty listing as markdown.
//
// Firecrawl renders the JavaScript-heavy listing page and hands back
// markdown. The BountySource trait hides that behind a single call so the
// orchestrator can be driven from a saved page or a test fixture instead.

pub mod firecrawl;
pub mod traits;

pub use firecrawl::FirecrawlClient;
pub use traits::{BountySource, StaticSource};
