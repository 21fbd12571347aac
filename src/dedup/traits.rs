// Dedup store trait — the swap-ready abstraction over notified-link storage.
//
// Implementors: FileDedupStore (flat append-only log), MemoryDedupStore
// (tests and dry runs). A key-value store or database can slot in here
// without touching the orchestrator.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[async_trait]
pub trait DedupStore: Send + Sync {
    /// All links notified so far. Empty when no state exists yet.
    async fn read(&self) -> Result<HashSet<String>>;

    /// Durably append `link`. Appending a link twice is allowed; `read`
    /// collapses duplicates.
    async fn record(&self, link: &str) -> Result<()>;
}

/// In-memory store. Keeps the raw append log so duplicates are observable.
#[derive(Default)]
pub struct MemoryDedupStore {
    log: Mutex<Vec<String>>,
}

impl MemoryDedupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with links that count as already notified.
    pub fn with_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            log: Mutex::new(links.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of physical log entries, duplicates included.
    pub async fn entry_count(&self) -> usize {
        self.log.lock().await.len()
    }
}

#[async_trait]
impl DedupStore for MemoryDedupStore {
    async fn read(&self) -> Result<HashSet<String>> {
        Ok(self.log.lock().await.iter().cloned().collect())
    }

    async fn record(&self, link: &str) -> Result<()> {
        self.log.lock().await.push(link.to_string());
        Ok(())
    }
}
