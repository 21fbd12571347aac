// Bounty source trait — where the listing markdown comes from.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BountySource: Send + Sync {
    /// Fetch the current listing page as markdown.
    async fn fetch_markdown(&self) -> Result<String>;
}

/// A source that always returns the same document. Used for offline parsing
/// of saved pages and in tests.
pub struct StaticSource {
    markdown: String,
}

impl StaticSource {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }
}

#[async_trait]
impl BountySource for StaticSource {
    async fn fetch_markdown(&self) -> Result<String> {
        Ok(self.markdown.clone())
    }
}
